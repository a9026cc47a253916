//! Example: Creating a diagram from the semantic model
//!
//! Builds an E major barre chord on the 7th position without going through
//! the notation parser, then renders it to SVG.

use fretty::{
    DiagramBuilder, RenderOptions,
    semantic::{Diagram, InstrumentString, Marking, MarkingShape},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Building diagram from semantic model...\n");

    // Index finger barres the first fret of the diagram on every string.
    let barre = |string| Marking::new(0, string, "1", MarkingShape::Round).with_barre(true);
    // On the low string the barre cell is also the root.
    let root_barre = Marking::new(0, 5, "R", MarkingShape::Square).with_barre(true);

    let strings = vec![
        InstrumentString::new(0)
            .with_fret_count(4)
            .with_markings(vec![barre(0)]),
        InstrumentString::new(1)
            .with_fret_count(4)
            .with_markings(vec![barre(1)]),
        InstrumentString::new(2).with_fret_count(4).with_markings(vec![
            barre(2),
            Marking::new(1, 2, "2", MarkingShape::Round),
        ]),
        InstrumentString::new(3).with_fret_count(4).with_markings(vec![
            barre(3),
            Marking::new(2, 3, "4", MarkingShape::Round),
        ]),
        InstrumentString::new(4).with_fret_count(4).with_markings(vec![
            barre(4),
            Marking::new(2, 4, "3", MarkingShape::Round),
        ]),
        InstrumentString::new(5)
            .with_fret_count(4)
            .with_markings(vec![root_barre]),
    ];

    let diagram = Diagram::new("7", strings);

    println!("Created diagram:");
    println!("  Caption: {}", diagram.caption());
    println!("  Strings: {}", diagram.string_count());
    println!("  Frets: {}", diagram.fret_count());
    println!("  Barre spans: {:?}", diagram.barre_spans());
    println!();

    println!("Rendering to SVG...");
    let builder = DiagramBuilder::default();
    let svg = builder.render_svg(&diagram, &RenderOptions::new().with_width(240.0))?;

    println!("SVG generated successfully!");
    println!("SVG length: {} bytes", svg.len());

    let output_path = "from_semantic_output.svg";
    std::fs::write(output_path, &svg)?;
    println!("SVG written to: {}", output_path);

    Ok(())
}
