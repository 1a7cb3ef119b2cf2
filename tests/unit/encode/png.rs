use super::*;

fn frame(width: u32, height: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: px.repeat((width * height) as usize),
        premultiplied: true,
    }
}

#[test]
fn unpremultiply_handles_edges() {
    let mut px = vec![0, 0, 0, 0, 10, 20, 30, 255, 64, 32, 0, 128];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &[0, 0, 0, 0]);
    assert_eq!(&px[4..8], &[10, 20, 30, 255]);
    assert_eq!(&px[8..12], &[128, 64, 0, 128]);
}

#[test]
fn png_roundtrip_keeps_size_and_alpha() {
    let mut f = frame(4, 3, [0, 0, 0, 0]);
    // one half-transparent gold pixel, premultiplied
    f.data[0..4].copy_from_slice(&[108, 81, 17, 128]);

    let mut bytes = Vec::new();
    encode_png(&f, &mut bytes).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let img = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)
        .unwrap()
        .to_rgba8();
    assert_eq!(img.dimensions(), (4, 3));
    assert_eq!(img.get_pixel(0, 0).0, [215, 161, 34, 128]);
    assert_eq!(img.get_pixel(3, 2).0, [0, 0, 0, 0]);
}

#[test]
fn mismatched_buffer_is_an_encode_error() {
    let mut f = frame(2, 2, [0, 0, 0, 0]);
    f.data.pop();
    let err = encode_png(&f, Vec::new()).unwrap_err();
    assert!(matches!(err, BrandError::Encode(_)));
}
