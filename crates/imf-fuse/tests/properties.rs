use imf_core::{Image, to_f32};
use imf_fuse::{
    FusionMethod, ImageFuser, fuse_average, fuse_max, fuse_min, fuse_weighted_average,
};
use imf_pyr::LaplacianPyramid;
use imf_wavelet::{WaveletFamily, decompose, reconstruct};
use proptest::prelude::*;

fn image_u8(max_side: usize) -> impl Strategy<Value = Image<u8>> {
    (1..=max_side, 1..=max_side).prop_flat_map(|(w, h)| {
        proptest::collection::vec(any::<u8>(), w * h)
            .prop_map(move |data| Image::from_vec(w, h, data).expect("sized"))
    })
}

fn image_pair(max_side: usize) -> impl Strategy<Value = (Image<u8>, Image<u8>)> {
    (1..=max_side, 1..=max_side).prop_flat_map(|(w, h)| {
        let pixels = proptest::collection::vec(any::<u8>(), w * h);
        (pixels.clone(), pixels).prop_map(move |(a, b)| {
            (
                Image::from_vec(w, h, a).expect("sized"),
                Image::from_vec(w, h, b).expect("sized"),
            )
        })
    })
}

fn family() -> impl Strategy<Value = WaveletFamily> {
    proptest::sample::select(WaveletFamily::all().collect::<Vec<_>>())
}

fn max_abs_diff(a: &Image<u8>, b: &Image<u8>) -> i32 {
    a.data()
        .iter()
        .zip(b.data())
        .map(|(&x, &y)| (x as i32 - y as i32).abs())
        .max()
        .unwrap_or(0)
}

proptest! {
    #[test]
    fn symmetric_rules_commute((a, b) in image_pair(24)) {
        let (fa, fb) = (to_f32(&a.as_view()), to_f32(&b.as_view()));
        let (va, vb) = (fa.as_view(), fb.as_view());

        prop_assert_eq!(fuse_average(&va, &vb).expect("avg"), fuse_average(&vb, &va).expect("avg"));
        prop_assert_eq!(fuse_max(&va, &vb).expect("max"), fuse_max(&vb, &va).expect("max"));
        prop_assert_eq!(fuse_min(&va, &vb).expect("min"), fuse_min(&vb, &va).expect("min"));
    }

    #[test]
    fn weighted_average_swaps_with_complementary_alpha(
        (a, b) in image_pair(24),
        alpha in 0.0f32..=1.0,
    ) {
        let (fa, fb) = (to_f32(&a.as_view()), to_f32(&b.as_view()));
        let ab = fuse_weighted_average(&fa.as_view(), &fb.as_view(), alpha).expect("weighted");
        let ba = fuse_weighted_average(&fb.as_view(), &fa.as_view(), 1.0 - alpha).expect("weighted");
        prop_assert!(max_abs_diff(&ab, &ba) <= 1);
    }

    #[test]
    fn pixel_rules_are_idempotent(a in image_u8(24)) {
        let fa = to_f32(&a.as_view());
        let v = fa.as_view();
        prop_assert_eq!(&fuse_max(&v, &v).expect("max"), &a);
        prop_assert_eq!(&fuse_min(&v, &v).expect("min"), &a);
        prop_assert_eq!(&fuse_average(&v, &v).expect("avg"), &a);
    }

    #[test]
    fn average_lies_between_min_and_max((a, b) in image_pair(24)) {
        let (fa, fb) = (to_f32(&a.as_view()), to_f32(&b.as_view()));
        let (va, vb) = (fa.as_view(), fb.as_view());
        let lo = fuse_min(&va, &vb).expect("min");
        let hi = fuse_max(&va, &vb).expect("max");
        let avg = fuse_average(&va, &vb).expect("avg");
        for ((&l, &m), &h) in lo.data().iter().zip(avg.data()).zip(hi.data()) {
            prop_assert!(l <= m && m <= h, "{l} <= {m} <= {h}");
        }
    }

    #[test]
    fn output_takes_the_primary_shape(
        a in image_u8(20),
        b in image_u8(20),
        family in family(),
    ) {
        let fuser = ImageFuser::default();
        for method in FusionMethod::all(family) {
            let out = fuser.fuse(&a.as_view(), &b.as_view(), method).expect("fuse");
            prop_assert_eq!(out.shape(), a.shape(), "{}", method);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn wavelet_transform_round_trips(a in image_u8(20), family in family()) {
        let src = to_f32(&a.as_view());
        let bands = decompose(&src.as_view(), family).expect("decompose");
        let back = reconstruct(&bands, family).expect("reconstruct");
        prop_assert_eq!(back.shape(), src.shape());
        for (&r, &s) in back.data().iter().zip(src.data()) {
            prop_assert!((r - s).abs() < 1e-2, "{family}: {r} vs {s}");
        }
    }

    #[test]
    fn laplacian_pyramid_round_trips(a in image_u8(40), depth in 1usize..=6) {
        let src = to_f32(&a.as_view());
        let pyr = LaplacianPyramid::build(&src.as_view(), depth).expect("build");
        let back = pyr.collapse_to_u8().expect("collapse");
        prop_assert!(max_abs_diff(&back, &a) <= 1);
    }

    #[test]
    fn self_fusion_is_identity_for_transform_rules(a in image_u8(32), family in family()) {
        let fuser = ImageFuser::default();
        let view = a.as_view();
        let wavelet = fuser.fuse(&view, &view, FusionMethod::Wavelet(family)).expect("wavelet");
        prop_assert!(max_abs_diff(&wavelet, &a) <= 1);
        let pyramid = fuser.fuse(&view, &view, FusionMethod::LaplacianPyramid).expect("pyramid");
        prop_assert!(max_abs_diff(&pyramid, &a) <= 1);
    }
}
