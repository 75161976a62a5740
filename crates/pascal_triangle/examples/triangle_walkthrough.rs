use pascal_math::combinations;
use pascal_triangle::TriangleBuilder;

// Demo program following the beats of the explainer video: grow the
// triangle, focus the "n choose k" row, pair it against the actual choice
// groupings, then show the row sums.
fn main() {
    println!("=== Pascal's Triangle Walkthrough ===\n");

    let mut builder = TriangleBuilder::new();
    builder.generate(5);

    println!("Rows 0..=5 (addition rule):\n");
    for row in builder.rows() {
        let values: Vec<String> = row.cells.iter().map(|c| c.value.to_string()).collect();
        println!("  row {}: {}", row.index, values.join("  "));
    }

    println!("\nCell placement (apex at the origin):");
    for c in 0..=3 {
        let p = builder.cell_position(3, c).unwrap();
        println!("  cell (3, {c}) sits at ({:+.1}, {:+.1})", p.x, p.y);
    }

    println!("\nFocusing row 3 and lining it up against the choices...\n");
    builder.focus_on(3).unwrap();
    builder.translate_row(3, 0.0, 4.5).unwrap();

    let shapes = ["square", "circle", "triangle"];
    for k in 0..=shapes.len() {
        let groups = combinations(&shapes, k);
        let rendered: Vec<String> = groups.iter().map(|g| format!("{{{}}}", g.join(","))).collect();
        println!(
            "  choose {k} of {{square,circle,triangle}} -> {} way(s): {}",
            builder.cell(3, k).unwrap().value,
            rendered.join(" ")
        );
    }

    builder.unfocus().unwrap();
    println!("\nRow restored; focus cleared.");

    println!("\nRow sums are powers of two:");
    for r in 0..builder.row_count() {
        println!("  row {r} sums to {}", builder.row_sum(r).unwrap());
    }
}
