/// How out-of-range indices are resolved when a filter or sampler reaches
/// past the edge of an image.
#[derive(Debug, Clone, PartialEq)]
pub enum BorderMode<T> {
    /// Repeat the edge sample: `aaa|abcd|ddd`.
    Clamp,
    /// Read a fixed value outside the image.
    Constant(T),
    /// Mirror without repeating the edge sample: `dcb|abcd|cba`.
    Reflect101,
    /// Periodic extension: `bcd|abcd|abc`.
    Wrap,
}

pub fn map_index<T>(i: isize, len: usize, mode: &BorderMode<T>) -> Option<usize> {
    if len == 0 {
        return None;
    }

    match mode {
        BorderMode::Constant(_) => {
            if i < 0 || i >= len as isize {
                None
            } else {
                Some(i as usize)
            }
        }
        BorderMode::Clamp => {
            if i < 0 {
                Some(0)
            } else {
                Some((i as usize).min(len - 1))
            }
        }
        BorderMode::Reflect101 => {
            if len == 1 {
                return Some(0);
            }

            let period = (2 * len - 2) as isize;
            let r = i.rem_euclid(period) as usize;
            if r < len {
                Some(r)
            } else {
                Some((2 * len - 2) - r)
            }
        }
        BorderMode::Wrap => Some(i.rem_euclid(len as isize) as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::{BorderMode, map_index};

    #[test]
    fn clamp_mapping_handles_negative_and_overflow() {
        let mode = BorderMode::<f32>::Clamp;

        assert_eq!(map_index(-3, 5, &mode), Some(0));
        assert_eq!(map_index(0, 5, &mode), Some(0));
        assert_eq!(map_index(4, 5, &mode), Some(4));
        assert_eq!(map_index(99, 5, &mode), Some(4));
        assert_eq!(map_index(0, 0, &mode), None);
    }

    #[test]
    fn constant_mapping_only_resolves_in_range() {
        let mode = BorderMode::Constant(7.0f32);
        assert_eq!(map_index(-1, 3, &mode), None);
        assert_eq!(map_index(2, 3, &mode), Some(2));
        assert_eq!(map_index(3, 3, &mode), None);
    }

    #[test]
    fn reflect101_mirrors_around_edge_samples() {
        let mode = BorderMode::<f32>::Reflect101;

        for i in -4..=4 {
            assert_eq!(map_index(i, 1, &mode), Some(0));
        }

        let cases_len4 = [(-3, 3), (-2, 2), (-1, 1), (0, 0), (3, 3), (4, 2), (5, 1), (6, 0)];
        for (i, expected) in cases_len4 {
            assert_eq!(map_index(i, 4, &mode), Some(expected), "index {i}");
        }
    }

    #[test]
    fn wrap_is_periodic() {
        let mode = BorderMode::<f32>::Wrap;
        let cases = [(-5, 1), (-1, 2), (0, 0), (2, 2), (3, 0), (7, 1)];
        for (i, expected) in cases {
            assert_eq!(map_index(i, 3, &mode), Some(expected), "index {i}");
        }
    }
}
