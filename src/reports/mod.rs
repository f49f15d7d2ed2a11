use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use ergosurg::config::ScoringWeights;
use ergosurg::core_types::ToolParameters;
use ergosurg::render::PRESSURE_ALARM_KPA;
use ergosurg::scorer::{ErgonomicMetrics, MetricsDelta, ScoreDetails};

fn right_align(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn index_cell(v: f32) -> Cell {
    let cell = Cell::new(format!("{:.1}", v));
    if v >= 70.0 {
        cell.fg(Color::Green)
    } else if v < 40.0 {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

fn pressure_cell(kpa: f32) -> Cell {
    let cell = Cell::new(format!("{:.1}", kpa));
    if kpa > PRESSURE_ALARM_KPA {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

pub fn print_parameters(name: &str, p: &ToolParameters) {
    println!("\nTool: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("Diameter (mm)"),
        Cell::new("Curvature (°)"),
        Cell::new("Handle Len (mm)"),
        Cell::new("Grip Force (N)"),
        Cell::new("Material"),
        Cell::new("Hand"),
        Cell::new("Grip"),
    ]);
    table.add_row(vec![
        Cell::new(format!("{:.1}", p.diameter)),
        Cell::new(format!("{:.1}", p.curvature)),
        Cell::new(format!("{:.1}", p.handle_length)),
        Cell::new(format!("{:.1}", p.grip_force)),
        Cell::new(p.material.display_name()),
        Cell::new(p.hand_size.short_code()),
        Cell::new(p.grip.map_or("-".to_string(), |g| g.to_string())),
    ]);
    for i in 0..7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Center);
        }
    }
    println!("{}", table);
}

pub fn print_scoring_report(results: &[(String, ScoreDetails)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Tool").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Comfort"),
        Cell::new("Precision"),
        Cell::new("Stability"),
        Cell::new("kPa"),
        Cell::new("Ideal"),
        Cell::new("Dev"),
    ]);
    right_align(&mut table, 1..=7);

    for (name, d) in results {
        let m = &d.metrics;
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", m.score))
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
            index_cell(m.comfort),
            index_cell(m.precision),
            index_cell(m.stability),
            pressure_cell(m.pressure),
            Cell::new(format!("{:.0}", d.ideal_diameter)),
            Cell::new(format!("{:.1}", d.diameter_deviation)),
        ]);
    }
    println!("\n{}", table);
}

/// Raw indices and every applied adjustment, headed by the active weights.
pub fn print_breakdown_report(results: &[(String, ScoreDetails)], w: &ScoringWeights) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Tool").add_attribute(Attribute::Bold),
        Cell::new("Cmf\nraw"),
        Cell::new(format!("Sil\n{:.0}", w.bonus_comfort_silicone)),
        Cell::new(format!("Crv\n{:.0}", w.bonus_comfort_neutral_curve)),
        Cell::new("Prc\nraw"),
        Cell::new(format!("Stl\n{:.0}", w.bonus_precision_steel)),
        Cell::new(format!("Pch\n{:.0}", w.bonus_precision_pinch)),
        Cell::new(format!("Lng\n{:.0}", w.penalty_long_handle)),
        Cell::new(format!("Thn\n{:.0}", w.penalty_thin_diameter)),
        Cell::new("Stb\nraw"),
        Cell::new(format!("Pwr\n{:.0}", w.bonus_stability_power)),
        Cell::new(format!("HiC\n{:.0}", w.bonus_stability_high_curve)),
        Cell::new("Area\nmm²"),
    ]);
    right_align(&mut table, 1..=12);

    for (name, d) in results {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.1}", d.raw_comfort)),
            Cell::new(format!("{:.0}", d.bonus_silicone)),
            Cell::new(format!("{:.0}", d.bonus_neutral_curve)),
            Cell::new(format!("{:.1}", d.raw_precision)),
            Cell::new(format!("{:.0}", d.bonus_steel)),
            Cell::new(format!("{:.0}", d.bonus_pinch)),
            Cell::new(format!("{:.0}", d.penalty_long_handle)).fg(Color::Red),
            Cell::new(format!("{:.0}", d.penalty_thin_diameter)).fg(Color::Red),
            Cell::new(format!("{:.1}", d.raw_stability)),
            Cell::new(format!("{:.0}", d.bonus_power)),
            Cell::new(format!("{:.0}", d.bonus_high_curve)),
            Cell::new(format!("{:.0}", d.contact_area)),
        ]);
    }
    println!("\n{}", table);
}

/// Baseline vs current, one row per metric.
pub fn print_comparison_report(
    baseline: &ErgonomicMetrics,
    current: &ErgonomicMetrics,
    delta: &MetricsDelta,
) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Comparison vs Baseline").add_attribute(Attribute::Bold),
        Cell::new("Baseline"),
        Cell::new("Current"),
        Cell::new("Delta"),
    ]);
    right_align(&mut table, 1..=3);

    let rows = [
        ("Comfort", baseline.comfort, current.comfort, delta.comfort, false),
        ("Precision", baseline.precision, current.precision, delta.precision, false),
        ("Stability", baseline.stability, current.stability, delta.stability, false),
        ("Pressure (kPa)", baseline.pressure, current.pressure, delta.pressure, true),
        ("Ergonomic Score", baseline.score, current.score, delta.score, false),
    ];

    for (label, before, after, diff, lower_is_better) in rows {
        let improved = if lower_is_better { diff < 0.0 } else { diff > 0.0 };
        let diff_cell = Cell::new(format!("{:+.1}", diff));
        let diff_cell = if diff == 0.0 {
            diff_cell
        } else if improved {
            diff_cell.fg(Color::Green)
        } else {
            diff_cell.fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(label),
            Cell::new(format!("{:.1}", before)),
            Cell::new(format!("{:.1}", after)),
            diff_cell,
        ]);
    }
    println!("\n{}", table);
}

/// Report reference number. Seeded runs are reproducible.
pub fn generate_reference(seed: Option<u64>) -> u32 {
    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    rng.u32(0..100_000)
}

pub fn print_analysis_report(project: &str, reference: u32, p: &ToolParameters, d: &ScoreDetails) {
    println!("\n=== 📋 ERGONOMIC ANALYSIS REPORT ===");
    println!("Project: {}   REF: {:05}", project, reference);

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let rows: Vec<(&str, String)> = vec![
        ("Handle Diameter", format!("{:.1} mm", p.diameter)),
        ("Handle Curvature", format!("{:.1}°", p.curvature)),
        ("Handle Length", format!("{:.1} mm", p.handle_length)),
        ("Grip Force", format!("{:.1} N", p.grip_force)),
        ("Material Spec", p.material.display_name().to_string()),
        ("Friction Coefficient", format!("µ={:.1}", p.material.friction())),
        ("Material Density", format!("{:.1} g/cm³", p.material.density())),
        ("Hand Model", format!("Size {}", p.hand_size.short_code())),
        ("Ideal Diameter", format!("{:.0} mm", d.ideal_diameter)),
        ("Contact Pressure", format!("{:.1} kPa", d.metrics.pressure)),
        ("Comfort Index", format!("{:.1}", d.metrics.comfort)),
        ("Precision Index", format!("{:.1}", d.metrics.precision)),
        ("Stability Index", format!("{:.1}", d.metrics.stability)),
        ("Ergonomic Score", format!("{:.1} / 100", d.metrics.score)),
    ];
    for (label, value) in rows {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(value),
        ]);
    }
    right_align(&mut table, 1..=1);
    println!("{}", table);

    println!(
        "\nThe {:.1} mm diameter with {} gives µ={:.1} at the palm; \
         deviation from the {:.0} mm reference is {:.1} mm.",
        p.diameter,
        p.material.display_name(),
        p.material.friction(),
        d.ideal_diameter,
        d.diameter_deviation
    );
}
