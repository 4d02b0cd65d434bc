//! SVG drawing surface.
//! Renders overlay draw requests into a standalone SVG document

use std::f64::consts::PI;

use crate::draw::DrawingSurface;
use crate::geometry::Point;
use crate::style::ShadowStyle;

/// Arrowhead length in canvas units.
const ARROW_HEAD_LENGTH: f64 = 10.0;

/// Arrowhead half-angle in radians (30°).
const ARROW_HEAD_ANGLE: f64 = PI / 6.0;

const FONT_SIZE: f64 = 15.0;
const TEXT_PADDING: f64 = 5.0;
const SHADOW_FILTER_ID: &str = "overlay-shadow";

/// Drawing surface that accumulates SVG elements.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: u32,
    height: u32,
    shadow: Option<ShadowStyle>,
    uses_shadow: bool,
    body: String,
}

impl SvgSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            shadow: None,
            uses_shadow: false,
            body: String::with_capacity(1024),
        }
    }

    /// Finish the document and return the SVG markup.
    pub fn finish(self) -> String {
        let mut svg = String::with_capacity(self.body.len() + 512);
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = self.width,
            h = self.height
        ));

        if let Some(shadow) = self.shadow.as_ref().filter(|_| self.uses_shadow) {
            svg.push_str(&format!(
                "  <defs><filter id=\"{}\"><feDropShadow dx=\"{:.2}\" dy=\"{:.2}\" stdDeviation=\"{:.2}\" flood-color=\"{}\"/></filter></defs>\n",
                SHADOW_FILTER_ID,
                shadow.offset_x,
                shadow.offset_y,
                shadow.blur / 2.0,
                escape(&shadow.color)
            ));
        }

        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }

    fn filter_attr(&mut self) -> &'static str {
        match &self.shadow {
            Some(shadow) if shadow.enabled => {
                self.uses_shadow = true;
                r#" filter="url(#overlay-shadow)""#
            }
            _ => "",
        }
    }
}

impl DrawingSurface for SvgSurface {
    fn set_shadow(&mut self, shadow: &ShadowStyle) {
        self.shadow = Some(shadow.clone());
    }

    fn draw_arrow(
        &mut self,
        start: Point,
        end: Point,
        color: &str,
        line_width: f64,
        line_dash: Option<&[f64]>,
    ) {
        let filter = self.filter_attr();
        let dash = match line_dash {
            Some(pattern) if !pattern.is_empty() => {
                let values: Vec<String> = pattern.iter().map(|v| format!("{:.2}", v)).collect();
                format!(r#" stroke-dasharray="{}""#, values.join(" "))
            }
            _ => String::new(),
        };

        let angle = (end.y - start.y).atan2(end.x - start.x);
        let left = Point::new(
            end.x - ARROW_HEAD_LENGTH * (angle - ARROW_HEAD_ANGLE).cos(),
            end.y - ARROW_HEAD_LENGTH * (angle - ARROW_HEAD_ANGLE).sin(),
        );
        let right = Point::new(
            end.x - ARROW_HEAD_LENGTH * (angle + ARROW_HEAD_ANGLE).cos(),
            end.y - ARROW_HEAD_LENGTH * (angle + ARROW_HEAD_ANGLE).sin(),
        );

        self.body.push_str(&format!(
            "  <path d=\"M {:.2} {:.2} L {:.2} {:.2} M {:.2} {:.2} L {:.2} {:.2} L {:.2} {:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{:.2}\"{}{}/>\n",
            start.x,
            start.y,
            end.x,
            end.y,
            left.x,
            left.y,
            end.x,
            end.y,
            right.x,
            right.y,
            escape(color),
            line_width,
            dash,
            filter
        ));
    }

    fn draw_text_box(&mut self, text: &str, x: f64, y: f64, color: &str) {
        let filter = self.filter_attr();
        self.body.push_str(&format!(
            "  <text x=\"{:.2}\" y=\"{:.2}\" fill=\"{}\" font-family=\"sans-serif\" font-size=\"{}\" dominant-baseline=\"hanging\"{}>{}</text>\n",
            x + TEXT_PADDING,
            y + TEXT_PADDING,
            escape(color),
            FONT_SIZE,
            filter,
            escape(text)
        ));
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let svg = SvgSurface::new(800, 600).finish();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 800 600""#));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(!svg.contains("<defs>"));
    }

    #[test]
    fn test_arrow_and_text() {
        let mut surface = SvgSurface::new(800, 600);
        surface.draw_arrow(
            Point::new(15.0, 590.0),
            Point::new(115.0, 590.0),
            "white",
            1.0,
            None,
        );
        surface.draw_text_box("5 cm", 117.0, 580.0, "white");
        let svg = surface.finish();

        assert!(svg.contains("M 15.00 590.00 L 115.00 590.00"));
        assert!(svg.contains(r#"stroke="white""#));
        assert!(svg.contains(">5 cm</text>"));
        assert!(!svg.contains("stroke-dasharray"));
    }

    #[test]
    fn test_dash_and_shadow() {
        let mut surface = SvgSurface::new(100, 100);
        surface.set_shadow(&ShadowStyle {
            enabled: true,
            ..Default::default()
        });
        surface.draw_arrow(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            "red",
            2.0,
            Some(&[4.0, 2.0]),
        );
        let svg = surface.finish();

        assert!(svg.contains(r#"stroke-dasharray="4.00 2.00""#));
        assert!(svg.contains("<feDropShadow"));
        assert!(svg.contains(r#"filter="url(#overlay-shadow)""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut surface = SvgSurface::new(10, 10);
        surface.draw_text_box("<a & b>", 0.0, 0.0, "white");
        let svg = surface.finish();
        assert!(svg.contains("&lt;a &amp; b&gt;"));
    }
}
