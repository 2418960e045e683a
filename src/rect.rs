/// A rectangle, specified by two opposite corners, in points.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    /// The x-coordinate of the first (typically, lower-left) corner.
    pub x1: f32,
    /// The y-coordinate of the first (typically, lower-left) corner.
    pub y1: f32,
    /// The x-coordinate of the second (typically, upper-right) corner.
    pub x2: f32,
    /// The y-coordinate of the second (typically, upper-right) corner.
    pub y2: f32,
}

impl Rect {
    /// A rectangle anchored at the origin covering a page of the given size
    pub fn from_size((width, height): (f32, f32)) -> Rect {
        Rect {
            x1: 0.0,
            y1: 0.0,
            x2: width,
            y2: height,
        }
    }

    pub fn width(&self) -> f32 {
        (self.x2 - self.x1).abs()
    }

    pub fn height(&self) -> f32 {
        (self.y2 - self.y1).abs()
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(r: Rect) -> Self {
        pdf_writer::Rect {
            x1: r.x1,
            y1: r.y1,
            x2: r.x2,
            y2: r.y2,
        }
    }
}

impl TryFrom<&[lopdf::Object]> for Rect {
    type Error = String;

    /// Reads a PDF rectangle array (`[x1 y1 x2 y2]`) as parsed by [lopdf]
    fn try_from(values: &[lopdf::Object]) -> Result<Self, Self::Error> {
        if values.len() != 4 {
            return Err(format!("expected 4 numbers, found {}", values.len()));
        }
        let mut nums = [0.0f32; 4];
        for (slot, value) in nums.iter_mut().zip(values) {
            *slot = match value {
                lopdf::Object::Integer(i) => *i as f32,
                lopdf::Object::Real(r) => *r as f32,
                other => return Err(format!("expected a number, found {other:?}")),
            };
        }
        Ok(Rect {
            x1: nums[0],
            y1: nums[1],
            x2: nums[2],
            y2: nums[3],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::Object;

    #[test]
    fn reads_mixed_integer_and_real_arrays() {
        let arr = vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(612),
            Object::Real(792.0),
        ];
        let r = Rect::try_from(arr.as_slice()).unwrap();
        assert_eq!(r.width(), 612.0);
        assert_eq!(r.height(), 792.0);
    }

    #[test]
    fn rejects_short_arrays() {
        let arr = vec![Object::Integer(0), Object::Integer(0)];
        assert!(Rect::try_from(arr.as_slice()).is_err());
    }

    #[test]
    fn dimensions_ignore_corner_order() {
        let r = Rect {
            x1: 100.0,
            y1: 50.0,
            x2: 0.0,
            y2: 0.0,
        };
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
    }
}
