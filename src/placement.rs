use crate::rect::Rect;

/// Margins kept clear on either side of a page. `horizontal` applies to the
/// left and right edges, `vertical` to the top and bottom.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Padding {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Padding {
    pub fn symmetric(horizontal: f32, vertical: f32) -> Padding {
        Padding {
            horizontal,
            vertical,
        }
    }

    pub fn all(value: f32) -> Padding {
        Padding::symmetric(value, value)
    }

    /// The area left over inside a page of the given size, as (width, height)
    pub fn usable_area(&self, page_width: f32, page_height: f32) -> (f32, f32) {
        (
            page_width - self.horizontal * 2.0,
            page_height - self.vertical * 2.0,
        )
    }
}

impl Default for Padding {
    fn default() -> Self {
        Padding::all(30.0)
    }
}

/// Where (and how large) an image is drawn on a page, in page coordinates with
/// the origin at the bottom-left corner
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// The uniform scale applied to the image's pixel dimensions
    pub scale: f32,
}

impl Placement {
    pub fn rect(&self) -> Rect {
        Rect {
            x1: self.x,
            y1: self.y,
            x2: self.x + self.width,
            y2: self.y + self.height,
        }
    }
}

/// The uniform scale that shrinks an image into the usable area. Images are
/// never enlarged: anything that already fits is drawn at 1:1.
pub fn scale_to_fit(image_w: f32, image_h: f32, usable_w: f32, usable_h: f32) -> f32 {
    match (image_w > usable_w, image_h > usable_h) {
        (false, false) => 1.0,
        (true, true) => (usable_w / image_w).min(usable_h / image_h),
        (true, false) => usable_w / image_w,
        (false, true) => usable_h / image_h,
    }
}

/// Computes the rectangle an image of `image_w` × `image_h` occupies on a
/// `page_w` × `page_h` page with the given padding.
///
/// The image is centred horizontally within the usable area, and sits flush
/// against the top of the usable area vertically.
pub fn compute_placement(
    image_w: f32,
    image_h: f32,
    page_w: f32,
    page_h: f32,
    pad_w: f32,
    pad_h: f32,
) -> Placement {
    let usable_w = page_w - pad_w * 2.0;
    let usable_h = page_h - pad_h * 2.0;

    let scale = scale_to_fit(image_w, image_h, usable_w, usable_h);
    let width = image_w * scale;
    let height = image_h * scale;

    Placement {
        x: pad_w + (usable_w - width) / 2.0,
        y: usable_h - height + pad_h,
        width,
        height,
        scale,
    }
}

/// [compute_placement] for an image on a page described by its media box
pub fn place_on_page(image_w: f32, image_h: f32, page: &Rect, padding: &Padding) -> Placement {
    let mut placement = compute_placement(
        image_w,
        image_h,
        page.width(),
        page.height(),
        padding.horizontal,
        padding.vertical,
    );
    // media boxes don't have to start at the origin
    placement.x += page.x1.min(page.x2);
    placement.y += page.y1.min(page.y2);
    placement
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::{A4, LETTER};

    const EPS: f32 = 1e-3;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn fitting_images_are_not_scaled() {
        for (w, h) in [(1.0, 1.0), (100.0, 200.0), (552.0, 732.0), (10.0, 732.0)] {
            let p = compute_placement(w, h, LETTER.0, LETTER.1, 30.0, 30.0);
            assert_eq!(p.scale, 1.0);
            assert_eq!(p.width, w);
            assert_eq!(p.height, h);
        }
    }

    #[test]
    fn images_exceeding_both_axes_fit_and_keep_aspect_ratio() {
        for (w, h) in [(4000.0, 3000.0), (3000.0, 4000.0), (1000.0, 1000.0), (600.0, 5000.0)] {
            let p = compute_placement(w, h, A4.0, A4.1, 30.0, 30.0);
            let (uw, uh) = Padding::all(30.0).usable_area(A4.0, A4.1);
            assert!(p.width <= uw + EPS, "{w}x{h}: width {}", p.width);
            assert!(p.height <= uh + EPS, "{w}x{h}: height {}", p.height);
            assert!(close(p.width / p.height, w / h));
        }
    }

    #[test]
    fn large_landscape_photo_on_a4ish_page() {
        let p = compute_placement(4000.0, 3000.0, 595.0, 842.0, 30.0, 30.0);
        let expected = ((595.0f32 - 60.0) / 4000.0).min((842.0 - 60.0) / 3000.0);
        assert!(close(p.scale, expected));
        assert!(p.width <= 535.0 + EPS);
        assert!(p.height <= 782.0 + EPS);
        // the width constraint is the tighter one here
        assert!(close(p.width, 535.0));
    }

    #[test]
    fn single_axis_overflow_scales_to_that_axis() {
        // too wide only
        let p = compute_placement(1070.0, 100.0, 595.0, 842.0, 30.0, 30.0);
        assert!(close(p.scale, 0.5));
        assert!(close(p.width, 535.0));
        assert!(close(p.height, 50.0));

        // too tall only
        let p = compute_placement(100.0, 1564.0, 595.0, 842.0, 30.0, 30.0);
        assert!(close(p.scale, 0.5));
        assert!(close(p.height, 782.0));
        assert!(close(p.width, 50.0));
    }

    #[test]
    fn always_centred_horizontally() {
        for (w, h) in [(10.0, 10.0), (4000.0, 3000.0), (1070.0, 100.0), (100.0, 1564.0)] {
            let p = compute_placement(w, h, 595.0, 842.0, 30.0, 30.0);
            let usable_w = 595.0 - 60.0;
            assert!(close(p.x + p.width / 2.0, 30.0 + usable_w / 2.0));
        }
    }

    #[test]
    fn top_aligned_inside_usable_area() {
        let p = compute_placement(100.0, 100.0, 612.0, 792.0, 30.0, 30.0);
        // top edge of the image touches the top padding
        assert!(close(p.y + p.height, 792.0 - 30.0));
        assert!(close(p.y, 792.0 - 60.0 - 100.0 + 30.0));
    }

    #[test]
    fn offset_media_boxes_shift_the_placement() {
        let page = Rect {
            x1: 10.0,
            y1: 20.0,
            x2: 622.0,
            y2: 812.0,
        };
        let p = place_on_page(100.0, 100.0, &page, &Padding::default());
        let q = compute_placement(100.0, 100.0, 612.0, 792.0, 30.0, 30.0);
        assert!(close(p.x, q.x + 10.0));
        assert!(close(p.y, q.y + 20.0));
    }

    #[test]
    fn rect_spans_the_placement() {
        let p = compute_placement(100.0, 50.0, 612.0, 792.0, 30.0, 30.0);
        let r = p.rect();
        assert!(close(r.width(), 100.0));
        assert!(close(r.height(), 50.0));
        assert_eq!(r.x1, p.x);
    }
}
