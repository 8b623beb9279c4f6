//! Example: Building a scene in code
//!
//! This example assembles a scene from passes directly, without a scene
//! file, and prints the rendered SVG.

use vellum::{
    SceneBuilder,
    geometry::Point,
    scene::{Pass, Scene, TurtleStep},
    shape::Shape,
    style::Style,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let blue = Style::default()
        .with_stroke_color("blue")
        .with_stroke_width(2.0);

    // A triangle and a diagonal drawn with a pen
    let shapes = Pass::pen(vec![
        Shape::polygon([[350.0, 150.0], [250.0, 300.0], [150.0, 150.0]]),
        Shape::line([100.0, 100.0], [200.0, 250.0]),
    ]);

    // A square outline traced by a turtle
    let corners = [[50.0, 50.0], [350.0, 50.0], [350.0, 350.0], [50.0, 350.0], [50.0, 50.0]];
    let mut steps = vec![TurtleStep::MoveTo(Point::from(corners[0])), TurtleStep::PenDown];
    steps.extend(corners[1..].iter().map(|&c| TurtleStep::MoveTo(c.into())));
    let outline = Pass::turtle(steps).with_style(blue);

    let scene = Scene::new()
        .with_size(4.0, 4.0)
        .with_pass(shapes)
        .with_pass(outline);

    let builder = SceneBuilder::default();
    let svg = builder.render_svg(&scene)?;

    println!("{svg}");
    Ok(())
}
