use imf_core::{BorderMode, map_index};

/// 5-tap binomial kernel `[1 4 6 4 1] / 16` used by reduce and expand.
pub const BINOMIAL5: [f32; 5] = [1.0 / 16.0, 4.0 / 16.0, 6.0 / 16.0, 4.0 / 16.0, 1.0 / 16.0];

pub fn convolve_f32(
    signal: &[f32],
    kernel: &[f32],
    radius: usize,
    border: &BorderMode<f32>,
    out: &mut [f32],
) {
    assert_eq!(out.len(), signal.len(), "out must match signal length");
    assert_eq!(
        kernel.len(),
        2 * radius + 1,
        "kernel len must be 2*radius+1"
    );

    let n = signal.len();
    if n == 0 {
        return;
    }

    let interior_start = radius.min(n);
    let interior_end = n.saturating_sub(radius).max(interior_start);

    for i in (0..interior_start).chain(interior_end..n) {
        out[i] = convolve_at_border(signal, kernel, radius, border, i);
    }

    // Interior: full kernel footprint in bounds.
    for i in interior_start..interior_end {
        let window = &signal[i - radius..=i + radius];
        out[i] = window
            .iter()
            .zip(kernel.iter().rev())
            .map(|(&s, &k)| s * k)
            .sum();
    }
}

fn convolve_at_border(
    signal: &[f32],
    kernel: &[f32],
    radius: usize,
    border: &BorderMode<f32>,
    i: usize,
) -> f32 {
    let n = signal.len();
    let mut acc = 0.0f32;
    for (k, &kv) in kernel.iter().enumerate() {
        let idx = i as isize + radius as isize - k as isize;
        let v = match map_index(idx, n, border) {
            Some(j) => signal[j],
            None => match border {
                BorderMode::Constant(c) => *c,
                _ => unreachable!("non-constant borders always map into the signal"),
            },
        };
        acc += v * kv;
    }
    acc
}
