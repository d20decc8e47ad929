//! Decorative device bezel wrapping an embedded content region.
//!
//! All measurements derive from one reference design (3735×2545 units) and
//! scale linearly with the requested width, so the frame keeps its aspect
//! ratio at any size.

use leptos::prelude::*;

use crate::theme::Palette;

/// Reference bezel design, in design units.
pub const REFERENCE_WIDTH: f64 = 3735.0;
pub const REFERENCE_HEIGHT: f64 = 2545.0;

const REF_FRAME_RADIUS: f64 = 64.0;
const REF_SCREEN_RADIUS: f64 = 5.0;
const REF_MARGIN_X: f64 = 97.0;
const REF_MARGIN_TOP: f64 = 90.0;
const REF_MARGIN_BOTTOM: f64 = 461.0;
const REF_BORDER: f64 = 5.0;

/// Pixel measurements of one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGeometry {
    pub width: f64,
    pub height: f64,
    pub frame_radius: f64,
    pub screen_radius: f64,
    pub margin_x: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub border: f64,
}

impl FrameGeometry {
    /// Scale the reference design down (or up) to `width` pixels.
    pub fn for_width(width: f64) -> Self {
        let scale = width / REFERENCE_WIDTH;
        Self {
            width,
            height: REFERENCE_HEIGHT * scale,
            frame_radius: REF_FRAME_RADIUS * scale,
            screen_radius: REF_SCREEN_RADIUS * scale,
            margin_x: REF_MARGIN_X * scale,
            margin_top: REF_MARGIN_TOP * scale,
            margin_bottom: REF_MARGIN_BOTTOM * scale,
            border: REF_BORDER * scale,
        }
    }

    /// Factor by which content rendered at `native_width` must shrink to fit
    /// this frame without re-flowing.
    pub fn content_scale(&self, native_width: f64) -> f64 {
        self.width / native_width
    }

    fn frame_style(&self, color: Option<Palette>) -> String {
        let mut style = format!(
            "width:{}px;height:{}px;border-radius:{}px;",
            self.width, self.height, self.frame_radius
        );
        if let Some(color) = color {
            style.push_str(&format!(
                "background-image:url('{}');",
                color.bezel_asset()
            ));
        }
        style
    }

    fn screen_style(&self) -> String {
        format!(
            "margin:{}px {}px {}px {}px;border:{}px solid black;border-radius:{}px;",
            self.margin_top,
            self.margin_x,
            self.margin_bottom,
            self.margin_x,
            self.border,
            self.screen_radius
        )
    }
}

/// The bezel graphic. With children, an inset screen region clips them to its
/// rounded corners; without children the frame renders as a standalone
/// graphic and the screen region is omitted. An absent colour simply leaves
/// the frame without background artwork.
#[component]
pub fn DeviceFrame(
    #[prop(into, optional)] color: Option<Palette>,
    width: f64,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let geometry = FrameGeometry::for_width(width);
    let frame_style = geometry.frame_style(color);
    let screen_style = geometry.screen_style();

    view! {
        <div class="device-frame" style=frame_style>
            {children.map(|children| view! {
                <div class="device-frame__screen" style=screen_style>
                    {children()}
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn measurements_scale_linearly_with_width() {
        let small = FrameGeometry::for_width(600.0);
        let large = FrameGeometry::for_width(1200.0);

        assert!(close(large.height, small.height * 2.0));
        assert!(close(large.frame_radius, small.frame_radius * 2.0));
        assert!(close(large.screen_radius, small.screen_radius * 2.0));
        assert!(close(large.margin_x, small.margin_x * 2.0));
        assert!(close(large.margin_top, small.margin_top * 2.0));
        assert!(close(large.margin_bottom, small.margin_bottom * 2.0));
        assert!(close(large.border, small.border * 2.0));
    }

    #[test]
    fn aspect_ratio_is_invariant() {
        for width in [120.0, 600.0, 1024.0, REFERENCE_WIDTH] {
            let geometry = FrameGeometry::for_width(width);
            assert!(close(
                geometry.width / geometry.height,
                REFERENCE_WIDTH / REFERENCE_HEIGHT
            ));
        }
    }

    #[test]
    fn reference_width_reproduces_the_reference_design() {
        let geometry = FrameGeometry::for_width(REFERENCE_WIDTH);
        assert!(close(geometry.height, REFERENCE_HEIGHT));
        assert!(close(geometry.frame_radius, 64.0));
        assert!(close(geometry.screen_radius, 5.0));
        assert!(close(geometry.margin_x, 97.0));
        assert!(close(geometry.margin_top, 90.0));
        assert!(close(geometry.margin_bottom, 461.0));
        assert!(close(geometry.border, 5.0));
    }

    #[test]
    fn content_scale_fits_native_resolution_to_the_frame() {
        let geometry = FrameGeometry::for_width(600.0);
        assert!(close(geometry.content_scale(1920.0), 0.3125));
    }

    #[test]
    fn background_artwork_follows_the_palette() {
        let geometry = FrameGeometry::for_width(600.0);
        let styled = geometry.frame_style(Some(Palette::Green));
        assert!(styled.contains("background-image:url('/imacs/green.svg')"));

        let plain = geometry.frame_style(None);
        assert!(!plain.contains("background-image"));
    }
}
