use std::fmt::Display;
use std::path::Path;

use console::Style;
use skyflat_core::background::{GradientAnchors, SamplePoints, SearchParams};
use skyflat_core::pipeline::config::SkyflatConfig;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    missing: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            missing: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn print_row(s: &Styles, label: &str, value: impl Display) {
    println!("    {:<14}{}", s.label.apply_to(label), s.value.apply_to(value));
}

fn print_optional(s: &Styles, label: &str, value: Option<usize>) {
    match value {
        Some(v) => print_row(s, label, v),
        None => println!(
            "    {:<14}{}",
            s.label.apply_to(label),
            s.missing.apply_to("not found")
        ),
    }
}

/// Print the title block for a gradient or flatten run.
pub fn print_run_header(title: &str, input: &Path, config: &SkyflatConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to(title));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(title.chars().count())));
    println!();
    println!(
        "  {:<16}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Output dir"),
        s.path.apply_to(config.output_dir.display())
    );
    print_row(&s, "Threshold", config.threshold);
    print_row(&s, "Edge columns", config.num_columns);
    println!();
}

/// Print raw search results, marking coordinates that were not found.
pub fn print_sample_points(points: &SamplePoints, params: &SearchParams) {
    let s = Styles::new();

    println!();
    println!(
        "  {} (threshold {}, {} edge columns)",
        s.header.apply_to("Sample Points"),
        params.threshold,
        params.num_columns
    );
    print_optional(&s, "Left x", points.left_x);
    print_row(&s, "1/3 x", points.one_third_x);
    print_optional(&s, "1/3 y", points.one_third_y);
    print_row(&s, "2/3 x", points.two_thirds_x);
    print_optional(&s, "2/3 y", points.two_thirds_y);
    print_optional(&s, "Right x", points.right_x);
}

/// Print the anchors a gradient was built from.
pub fn print_anchors(anchors: &GradientAnchors) {
    let s = Styles::new();

    println!("  {}", s.header.apply_to("Gradient Anchors"));
    print_row(&s, "Left", format!("(0, {})", anchors.left_x));
    print_row(
        &s,
        "One third",
        format!("({}, {})", anchors.one_third_y, anchors.one_third_x),
    );
    print_row(
        &s,
        "Two thirds",
        format!("({}, {})", anchors.two_thirds_y, anchors.two_thirds_x),
    );
    print_row(&s, "Right", format!("(0, {})", anchors.right_x));
}
