use crate::border::{BorderMode, map_index};
use crate::image::ImageView;

pub fn sample_nearest<T: Copy>(img: &ImageView<'_, T>, x: f32, y: f32, border: BorderMode<T>) -> T {
    if img.is_empty() {
        if let BorderMode::Constant(v) = border {
            return v;
        }
        panic!("cannot sample an empty image with non-constant border");
    }

    let xi = x.round() as isize;
    let yi = y.round() as isize;
    match (
        map_index(xi, img.width(), &border),
        map_index(yi, img.height(), &border),
    ) {
        // SAFETY: `map_index` returns indices in `[0, len)` for non-empty images.
        (Some(mx), Some(my)) => unsafe { *img.get_unchecked(mx, my) },
        _ => match border {
            BorderMode::Constant(v) => v,
            _ => unreachable!("non-constant borders always map into the image"),
        },
    }
}

pub fn sample_bilinear_f32<T: Copy + Into<f32>>(
    img: &ImageView<'_, T>,
    x: f32,
    y: f32,
    border: BorderMode<f32>,
) -> f32 {
    if img.is_empty() {
        if let BorderMode::Constant(v) = border {
            return v;
        }
        panic!("cannot sample an empty image with non-constant border");
    }

    let x0 = x.floor() as isize;
    let y0 = y.floor() as isize;
    let x1 = x0 + 1;
    let y1 = y0 + 1;

    let dx = x - x0 as f32;
    let dy = y - y0 as f32;

    let p00 = sample_at_f32(img, x0, y0, &border);
    let p10 = sample_at_f32(img, x1, y0, &border);
    let p01 = sample_at_f32(img, x0, y1, &border);
    let p11 = sample_at_f32(img, x1, y1, &border);

    let top = p00 * (1.0 - dx) + p10 * dx;
    let bottom = p01 * (1.0 - dx) + p11 * dx;
    top * (1.0 - dy) + bottom * dy
}

fn sample_at_f32<T: Copy + Into<f32>>(
    img: &ImageView<'_, T>,
    x: isize,
    y: isize,
    border: &BorderMode<f32>,
) -> f32 {
    match (
        map_index(x, img.width(), border),
        map_index(y, img.height(), border),
    ) {
        // SAFETY: `map_index` returns indices in `[0, len)` for non-empty images.
        (Some(xi), Some(yi)) => unsafe { (*img.get_unchecked(xi, yi)).into() },
        _ => match border {
            BorderMode::Constant(c) => *c,
            _ => unreachable!("non-constant borders always map into the image"),
        },
    }
}
