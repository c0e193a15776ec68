//! Integration tests for shape emission and document lifecycle

use regex::Regex;

use svg_scribe::{draw, Coordinates, Rounding, Style, SvgError, SvgImage};

fn white_fill() -> Style {
    Style::new().with("fill", "white")
}

fn assert_matches(svg: &str, pattern: &str) {
    let re = Regex::new(pattern).expect("valid test pattern");
    assert!(re.is_match(svg), "pattern {:?} not found in:\n{}", pattern, svg);
}

#[test]
fn test_initialize_empty_image() {
    let image = SvgImage::new(100.0, 100.0).unwrap();
    let svg = image.output();
    assert!(svg.contains(r#"width="100""#));
    assert!(svg.contains(r#"height="100""#));
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains(r#"xmlns="http://www.w3.org/2000/svg""#));
}

#[test]
fn test_close_image() {
    let mut image = SvgImage::new(100.0, 100.0).unwrap();
    image.close().unwrap();
    assert!(image.output().contains("</svg>"));
    assert!(image.is_closed());
}

#[test]
fn test_draw_auto_closes() {
    let image = draw(100.0, 100.0, |_| Ok(())).unwrap();
    assert!(image.is_closed());
}

#[test]
fn test_line_without_closure() {
    let mut image = SvgImage::new(100.0, 100.0).unwrap();
    image.line(0.0, 0.0, 100.0, 100.0, None).unwrap();
    image.close().unwrap();
    let svg = image.output();
    assert!(svg.contains("<line"));
    assert!(svg.contains(r#"x1="0""#));
    assert!(svg.contains(r#"y1="0""#));
    assert!(svg.contains(r#"x2="100""#));
    assert!(svg.contains(r#"y2="100""#));
}

#[test]
fn test_line_with_style() {
    let image = draw(100.0, 100.0, |img| {
        img.line(0.0, 0.0, 10.0, 10.0, Some(&white_fill()))
    })
    .unwrap();
    let svg = image.output();
    assert!(svg.contains("style="));
    assert!(svg.contains("fill:white"));
}

#[test]
fn test_circle() {
    let image = draw(100.0, 100.0, |img| img.circle(0.0, 0.0, 10.0, None)).unwrap();
    let svg = image.output();
    assert!(svg.contains(r#"<circle cx="0" cy="0" r="10""#));
}

#[test]
fn test_circle_with_style() {
    let image = draw(100.0, 100.0, |img| {
        img.circle(0.0, 0.0, 10.0, Some(&white_fill()))
    })
    .unwrap();
    assert!(image.output().contains("fill:white"));
}

#[test]
fn test_explicit_style_replaces_default_table() {
    let green = Style::new().with("stroke", "green");
    let image = draw(100.0, 100.0, |img| img.circle(0.0, 0.0, 10.0, Some(&green))).unwrap();
    let svg = image.output();
    assert!(!svg.contains("stroke:black"));
    assert!(svg.contains("stroke:green"));
}

#[test]
fn test_arc() {
    let image = draw(100.0, 100.0, |img| img.arc(10.0, 10.0, 5.0, 0.0, 135.0, None)).unwrap();
    assert_matches(&image.output(), r"<path d=.*a.*?/>");
}

#[test]
fn test_arc_with_style() {
    let green = Style::new().with("stroke", "green");
    let image = draw(100.0, 100.0, |img| {
        img.arc(10.0, 10.0, 5.0, 0.0, 135.0, Some(&green))
    })
    .unwrap();
    assert_matches(&image.output(), r"<path.*a.*?stroke.*?green.*?>");
}

#[test]
fn test_arc_large_and_clockwise_flags() {
    let image = draw(100.0, 100.0, |img| {
        img.arc(50.0, 50.0, 10.0, 0.0, 270.0, None)?;
        img.arc(50.0, 50.0, 10.0, 90.0, -90.0, None)
    })
    .unwrap();
    let svg = image.output();
    assert!(svg.contains("M60,50 a10,10 0 1,0 "));
    assert!(svg.contains(" 0 0,1 "));
}

#[test]
fn test_rectangle() {
    let image = draw(100.0, 100.0, |img| {
        img.rectangle(0.0, 0.0, 100.0, 300.0, Rounding::None, None)
    })
    .unwrap();
    let svg = image.output();
    assert!(svg.contains("<rect"));
    assert!(svg.contains(r#"width="100""#));
    assert!(svg.contains(r#"height="300""#));
    assert!(!svg.contains("rx="));
    assert!(!svg.contains("ry="));
}

#[test]
fn test_rectangle_with_style() {
    let image = draw(100.0, 100.0, |img| {
        img.rectangle(0.0, 0.0, 10.0, 10.0, Rounding::None, Some(&white_fill()))
    })
    .unwrap();
    assert!(image.output().contains("fill:white"));
}

#[test]
fn test_symmetric_round_rectangle() {
    let image = draw(100.0, 100.0, |img| {
        img.rectangle(0.0, 0.0, 100.0, 300.0, Rounding::from_radii(&[20.0])?, None)
    })
    .unwrap();
    let svg = image.output();
    assert!(svg.contains(r#"rx="20""#));
    assert!(svg.contains(r#"ry="20""#));
}

#[test]
fn test_non_symmetric_round_rectangle_with_style() {
    let image = draw(100.0, 100.0, |img| {
        img.rectangle(
            0.0,
            0.0,
            100.0,
            300.0,
            Rounding::from_radii(&[20.0, 5.0])?,
            Some(&white_fill()),
        )
    })
    .unwrap();
    let svg = image.output();
    assert!(svg.contains(r#"rx="20""#));
    assert!(svg.contains(r#"ry="5""#));
    assert!(svg.contains("fill:white"));
}

#[test]
fn test_rectangle_with_too_many_radii() {
    let mut image = SvgImage::new(100.0, 100.0).unwrap();
    let before = image.output();
    let result = Rounding::from_radii(&[1.0, 2.0, 3.0, 4.0])
        .and_then(|rounding| image.rectangle(0.0, 0.0, 1.0, 1.0, rounding, None));
    assert!(matches!(result, Err(SvgError::IllegalArgumentCount { count: 4 })));
    assert_eq!(image.output(), before);
}

#[test]
fn test_ellipse_with_style() {
    let image = draw(100.0, 100.0, |img| {
        img.ellipse(0.0, 0.0, 3.0, 10.0, Some(&white_fill()))
    })
    .unwrap();
    let svg = image.output();
    assert!(svg.contains(r#"<ellipse cx="0" cy="0" rx="3" ry="10""#));
    assert!(svg.contains("fill:white"));
}

#[test]
fn test_polygon_from_pairs() {
    let image = draw(100.0, 100.0, |img| {
        img.polygon([[0.0, 0.0], [1.0, 2.0], [3.0, 4.0]], None)
    })
    .unwrap();
    let svg = image.output();
    assert!(svg.contains("<polygon"));
    assert!(svg.contains(r#"points="0,0 1,2 3,4""#));
}

#[test]
fn test_polygon_with_style() {
    let image = draw(100.0, 100.0, |img| {
        img.polygon([[0.0, 0.0], [1.0, 2.0], [3.0, 4.0]], Some(&white_fill()))
    })
    .unwrap();
    assert!(image.output().contains("fill:white"));
}

#[test]
fn test_polyline_from_flat_list() {
    let image = draw(100.0, 100.0, |img| {
        img.polyline(Coordinates::from_flat(vec![0.0, 0.0, 1.0, 2.0, 3.0, 4.0]), None)
    })
    .unwrap();
    let svg = image.output();
    assert!(svg.contains("<polyline"));
    assert!(svg.contains(r#"points="0,0 1,2 3,4""#));
}

#[test]
fn test_odd_coordinate_count() {
    let result = draw(100.0, 100.0, |img| img.polygon(vec![0.0_f64, 0.0, 1.0], None));
    assert!(matches!(result, Err(SvgError::IllegalCoordinateCount { count: 3 })));
}

#[test]
fn test_update_width_and_height() {
    let image = draw(100.0, 100.0, |img| {
        img.set_width(200.0)?;
        img.set_height(300.0)
    })
    .unwrap();
    let svg = image.output();
    assert!(svg.contains(r#"width="200""#));
    assert!(svg.contains(r#"height="300""#));
    assert!(!svg.contains(r#"width="100""#));
    assert!(!svg.contains(r#"height="100""#));
}

#[test]
fn test_text() {
    let image = draw(100.0, 100.0, |img| img.text(10.0, 20.0, "Hello world!", None)).unwrap();
    let svg = image.output();
    assert!(svg.contains("<text"));
    assert!(svg.contains(r#"x="10""#));
    assert!(svg.contains(r#"y="20""#));
    assert!(svg.contains("Hello world!"));
}

#[test]
fn test_multiline_text() {
    let image = draw(100.0, 100.0, |img| img.text(10.0, 20.0, "Hello\nworld!", None)).unwrap();
    let svg = image.output();
    assert!(svg.contains(concat!(
        r#"<tspan x="10" dy="0em">Hello</tspan>"#,
        r#"<tspan x="10" dy="1em">world!</tspan>"#
    )));
}

#[test]
fn test_text_strips_trailing_whitespace_per_line() {
    let image = draw(100.0, 100.0, |img| img.text(0.0, 0.0, "one  \ntwo\t\n", None)).unwrap();
    let svg = image.output();
    assert!(svg.contains(r#"dy="0em">one</tspan>"#));
    assert!(svg.contains(r#"dy="1em">two</tspan>"#));
    assert_eq!(svg.matches("<tspan").count(), 2);
}

#[test]
fn test_text_with_font() {
    let font = Style::new()
        .with("font_family", "Times")
        .with("font-size", 24);
    let image = draw(100.0, 100.0, |img| {
        img.text(10.0, 20.0, "Hello\nworld!", Some(&font))
    })
    .unwrap();
    let svg = image.output();
    assert!(svg.contains(r#"font-family="Times""#));
    assert!(svg.contains(r#"font-size="24""#));
    assert!(!svg.contains("font-family:"));
    assert!(!svg.contains("font-size:"));
}

#[test]
fn test_text_default_fill() {
    let image = draw(100.0, 100.0, |img| img.text(0.0, 0.0, "x", None)).unwrap();
    assert!(image.output().contains(r#"style="fill:black;""#));
}

#[test]
fn test_text_default_fill_overrides_scoped_fill() {
    let red = Style::new().with("fill", "red");
    let image = draw(100.0, 100.0, |img| {
        img.with_style(&red, |img| img.text(0.0, 0.0, "a", None))
    })
    .unwrap();
    let svg = image.output();
    assert!(svg.contains(r#"<text x="0" y="0" style="fill:black;">"#));
    assert!(!svg.contains("fill:red"));
}

#[test]
fn test_text_explicit_fill_inside_scope() {
    let red = Style::new().with("fill", "red");
    let blue = Style::new().with("fill", "blue");
    let image = draw(100.0, 100.0, |img| {
        img.with_style(&red, |img| img.text(0.0, 0.0, "a", Some(&blue)))
    })
    .unwrap();
    assert!(image.output().contains(r#"style="fill:blue;""#));
}

#[test]
fn test_close_twice_keeps_one_closing_tag() {
    let mut image = draw(100.0, 100.0, |img| img.circle(1.0, 1.0, 1.0, None)).unwrap();
    image.close().unwrap();
    assert_eq!(image.output().matches("</svg>").count(), 1);
}

#[test]
fn test_drawing_after_close_is_rejected() {
    let mut image = draw(100.0, 100.0, |_| Ok(())).unwrap();
    let before = image.output();
    assert!(matches!(
        image.circle(0.0, 0.0, 1.0, None),
        Err(SvgError::DocumentClosed)
    ));
    assert_eq!(image.output(), before);
}
