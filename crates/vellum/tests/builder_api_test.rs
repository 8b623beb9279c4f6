//! Integration tests for the SceneBuilder API
//!
//! These tests verify that the public API works and is usable.

use vellum::{
    DrawError, SceneBuilder, VellumError,
    config::{AppConfig, CanvasConfig, OutputConfig},
    geometry::Point,
    scene::{Pass, Scene, TurtleStep},
    shape::Shape,
    style::{Style, StyleOptions},
};

const CROSS: &str = r#"
    width = 4
    height = 4

    [styles.blue]
    stroke_color = "blue"
    stroke_width = 2

    [[pass]]
    tool = "turtle"
    style = "blue"
    steps = [
        { action = "pen_up" },
        { action = "move_to", to = [0, 400] },
        { action = "pen_down" },
        { action = "move_to", to = [400, 0] },
        { action = "pen_up" },
        { action = "move_to", to = [0, 0] },
        { action = "pen_down" },
        { action = "move_to", to = [400, 400] },
    ]
"#;

#[test]
fn test_builder_api_exists() {
    let _builder = SceneBuilder::default();
}

#[test]
fn test_parse_simple_scene() {
    let builder = SceneBuilder::default();
    let result = builder.parse(CROSS);
    assert!(result.is_ok(), "Should parse valid scene: {:?}", result.err());
    assert_eq!(result.unwrap().passes().len(), 1);
}

#[test]
fn test_render_cross_document() {
    let builder = SceneBuilder::default();
    let scene = builder.parse(CROSS).expect("Failed to parse scene");
    let svg = builder.render_svg(&scene).expect("Failed to render scene");

    let expected = concat!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
        "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" ",
        "\"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n",
        "<svg width=\"4cm\" height=\"4cm\" viewBox=\"0 0 400 400\" ",
        "xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n",
        "  <line x1=\"0\" y1=\"400\" x2=\"400\" y2=\"0\" ",
        "style=\"stroke: blue; stroke-width: 2; fill: white\"/>\n",
        "  <line x1=\"0\" y1=\"0\" x2=\"400\" y2=\"400\" ",
        "style=\"stroke: blue; stroke-width: 2; fill: white\"/>\n",
        "</svg>\n",
    );
    assert_eq!(svg, expected);
}

#[test]
fn test_parse_invalid_syntax_returns_error() {
    let builder = SceneBuilder::default();
    let result = builder.parse("this is not a scene!!!");

    match result {
        Err(VellumError::Scene { src, .. }) => assert_eq!(src, "this is not a scene!!!"),
        other => panic!("Expected scene error, got {other:?}"),
    }
}

#[test]
fn test_parse_unknown_style_returns_error() {
    let source = r#"
        [[pass]]
        tool = "pen"
        style = "missing"
        shapes = []
    "#;

    let builder = SceneBuilder::default();
    let err = builder.parse(source).unwrap_err();
    assert_eq!(err.to_string(), "pass[0] uses undefined style `missing`");
}

#[test]
fn test_render_reports_failing_pass_and_step() {
    let source = r#"
        width = 1
        height = 1

        [[pass]]
        tool = "pen"
        shapes = [{ kind = "line", points = [[0, 0], [50, 50]] }]

        [[pass]]
        tool = "pen"
        shapes = [
            { kind = "line", points = [[0, 0], [100, 100]] },
            { kind = "polygon", points = [[0, 0], [101, 0], [0, 50]] },
        ]
    "#;

    let builder = SceneBuilder::default();
    let scene = builder.parse(source).expect("Failed to parse scene");

    match builder.render(&scene) {
        Err(VellumError::Draw { pass, step, source }) => {
            assert_eq!(pass, 1);
            assert_eq!(step, 1);
            assert!(matches!(source, DrawError::OutOfBounds { .. }));
        }
        other => panic!("Expected draw error, got {other:?}"),
    }
}

#[test]
fn test_builder_with_config() {
    let config = AppConfig::new(
        CanvasConfig::new(2.0, 1.0),
        StyleOptions {
            stroke_color: Some("red".to_string()),
            ..StyleOptions::default()
        },
        OutputConfig::new(4),
    );
    let builder = SceneBuilder::new(config);

    let scene = Scene::new().with_pass(Pass::pen(vec![Shape::line([0.0, 0.0], [200.0, 100.0])]));
    let svg = builder.render_svg(&scene).expect("Failed to render scene");

    assert!(svg.contains(r#"viewBox="0 0 200 100""#));
    assert!(svg.contains(r#"width="2cm" height="1cm""#));
    assert!(svg.contains("\n    <line "), "Elements should use the configured indent");
    assert!(svg.contains("stroke: red; stroke-width: 5; fill: white"));
}

#[test]
fn test_scene_size_overrides_config() {
    let builder = SceneBuilder::new(AppConfig::new(
        CanvasConfig::new(1.0, 1.0),
        StyleOptions::default(),
        OutputConfig::default(),
    ));
    let scene = Scene::new().with_size(3.0, 2.5);

    let drawing = builder.render(&scene).expect("Failed to render scene");
    assert_eq!(drawing.viewport_width(), 300);
    assert_eq!(drawing.viewport_height(), 250);
    assert!(drawing.is_empty());
}

#[test]
fn test_render_rejects_invalid_canvas() {
    let builder = SceneBuilder::default();
    let scene = Scene::new().with_size(0.0, 4.0);

    assert!(matches!(
        builder.render(&scene),
        Err(VellumError::InvalidCanvas { .. })
    ));

    let scene = Scene::new().with_size(4.0, 1e14);
    assert!(matches!(
        builder.render(&scene),
        Err(VellumError::InvalidCanvas { .. })
    ));
}

#[test]
fn test_render_large_canvas() {
    let source = r#"
        width = 5e7
        height = 1

        [[pass]]
        tool = "pen"
        shapes = [{ kind = "line", points = [[0, 0], [4.5e9, 0]] }]
    "#;

    let builder = SceneBuilder::default();
    let scene = builder.parse(source).expect("Failed to parse scene");
    let svg = builder.render_svg(&scene).expect("Failed to render scene");

    assert!(svg.contains(r#"viewBox="0 0 5000000000 100""#));
    assert!(svg.contains(r#"x2="4500000000""#));
}

#[test]
fn test_programmatic_turtle_pass() {
    let style = Style::default().with_fill_color("none");
    let scene = Scene::new().with_size(4.0, 4.0).with_pass(
        Pass::turtle(vec![
            TurtleStep::MoveTo(Point::new(100.0, 100.0)),
            TurtleStep::PenDown,
            TurtleStep::MoveTo(Point::new(300.0, 100.0)),
            TurtleStep::MoveTo(Point::new(300.0, 300.0)),
        ])
        .with_style(style),
    );

    let drawing = SceneBuilder::default()
        .render(&scene)
        .expect("Failed to render scene");

    assert_eq!(drawing.len(), 2);
    assert_eq!(
        drawing.elements()[1].attribute("style"),
        Some("stroke: black; stroke-width: 5; fill: none")
    );
}

#[test]
fn test_builder_reusability() {
    let builder = SceneBuilder::default();

    let first = builder.parse(CROSS).expect("Failed to parse first scene");
    let svg1 = builder.render_svg(&first).expect("Failed to render first scene");

    let second = builder
        .parse("[[pass]]\ntool = \"pen\"\nshapes = []\n")
        .expect("Failed to parse second scene");
    let svg2 = builder.render_svg(&second).expect("Failed to render second scene");

    assert_eq!(svg1.matches("<line ").count(), 2);
    assert!(!svg2.contains("<line "));
    assert!(svg2.contains("</svg>"));
}
