use std::fs;
use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};
use serde_json::json;
use tempfile::TempDir;

use steggy_core::commands::{hide, unveil};
use steggy_core::media::image::LsbCodec;
use steggy_core::media::payload::{MarkerLengthCodec, PayloadDecoder};
use steggy_core::*;

/// a few shades per frame only, GIF keeps such frames exact
fn frames(count: usize, width: u32, height: u32) -> Vec<RgbImage> {
    (0..count)
        .map(|i| {
            ImageBuffer::from_fn(width, height, |x, y| {
                let shade = ((x * 3 + y) % 5) as u8 * 12 + i as u8 * 4;
                Rgb([140 + shade, 90 + shade, 40 + shade])
            })
        })
        .collect()
}

fn write_carrier(path: &Path, count: usize, width: u32, height: u32) -> Carrier {
    let mut carrier = Carrier::from_frames(frames(count, width, height), 0, 100);
    carrier.save_as(path).expect("Cannot write carrier");
    carrier
}

fn red_lsbs_as_bytes(frame: &RgbImage, len: usize) -> Vec<u8> {
    frame
        .pixels()
        .take(len * 8)
        .map(|p| p.0[0] & 1)
        .collect::<Vec<_>>()
        .chunks(8)
        .map(|bits| bits.iter().fold(0, |byte, bit| byte << 1 | bit))
        .collect()
}

#[test]
fn should_hide_in_exactly_one_frame_and_unveil_it_again() {
    let out_dir = TempDir::new().unwrap();
    let input = out_dir.path().join("cat.gif");
    let output = out_dir.path().join("cat-crypt.gif");
    let extracted = out_dir.path().join("extracted_data.json");
    let original = write_carrier(&input, 3, 20, 20);

    let frame_index = api::hide::prepare()
        .with_payload(br#"{"a":1}"#.to_vec())
        .with_image(&input)
        .with_output(&output)
        .using_selector(|_: usize| -> usize { 1 })
        .execute()
        .unwrap();
    assert_eq!(frame_index, 1);

    let secret = Carrier::from_file(&output).unwrap();
    assert_eq!(secret.frames.len(), 3);
    assert_eq!(secret.loop_count, original.loop_count);
    assert_eq!(secret.frame_duration_ms, original.frame_duration_ms);
    assert_eq!(secret.frames[0], original.frames[0]);
    assert_eq!(secret.frames[2], original.frames[2]);

    let header_and_content = red_lsbs_as_bytes(&secret.frames[1], 5 + 17);
    assert_eq!(&header_and_content[..5], &[0xFF, 0, 0, 0, 17]);
    assert_eq!(&header_and_content[5..], b"%7B%22a%22%3A1%7D");

    let json = unveil(&output, &extracted).unwrap();
    assert_eq!(json, json!({"a": 1}));
    assert_eq!(fs::read_to_string(&extracted).unwrap(), "{\n    \"a\": 1\n}");
}

#[test]
fn should_change_nothing_but_red_lsbs_of_the_carrying_frame() {
    let out_dir = TempDir::new().unwrap();
    let input = out_dir.path().join("cat.gif");
    let output = out_dir.path().join("out.gif");
    let original = write_carrier(&input, 4, 24, 24);

    let frame_index = api::hide::prepare()
        .with_payload(br#"{"n": [1, 2, 3]}"#.to_vec())
        .with_image(&input)
        .with_output(&output)
        .execute()
        .unwrap();

    let secret = Carrier::from_file(&output).unwrap();
    for (i, (given, expected)) in secret.frames.iter().zip(&original.frames).enumerate() {
        if i == frame_index {
            for (g, e) in given.pixels().zip(expected.pixels()) {
                assert_eq!(g.0[0] & 0xFE, e.0[0] & 0xFE);
                assert_eq!(g.0[1..], e.0[1..]);
            }
        } else {
            assert_eq!(given, expected, "frame {i} must stay untouched");
        }
    }
}

#[test]
fn should_report_nothing_found_and_write_nothing() {
    let out_dir = TempDir::new().unwrap();
    let input = out_dir.path().join("plain.gif");
    let extracted = out_dir.path().join("extracted_data.json");
    write_carrier(&input, 3, 10, 10);

    let result = unveil(&input, &extracted);
    assert!(matches!(result, Err(SteggyError::NoPayloadFound)));
    assert!(!extracted.exists());
}

#[test]
fn should_fill_a_frame_to_the_last_bit() {
    let out_dir = TempDir::new().unwrap();
    let input = out_dir.path().join("tiny.gif");
    let output = out_dir.path().join("tiny-crypt.gif");
    let extracted = out_dir.path().join("tiny.json");
    // "%5B1%5D" is 7 bytes, plus 5 header bytes are 96 bits
    write_carrier(&input, 2, 12, 8);

    api::hide::prepare()
        .with_payload(b"[1]".to_vec())
        .with_image(&input)
        .with_output(&output)
        .execute()
        .unwrap();

    assert_eq!(unveil(&output, &extracted).unwrap(), json!([1]));
}

#[test]
fn should_refuse_a_payload_one_byte_too_large() {
    let out_dir = TempDir::new().unwrap();
    let input = out_dir.path().join("tiny.gif");
    let output = out_dir.path().join("tiny-crypt.gif");
    write_carrier(&input, 2, 12, 8);

    let result = api::hide::prepare()
        .with_payload(b"[12]".to_vec())
        .with_image(&input)
        .with_output(&output)
        .execute();

    assert!(matches!(
        result,
        Err(SteggyError::CapacityExceeded {
            required_bits: 104,
            available_bits: 96,
            ..
        })
    ));
    assert!(!output.exists());
}

#[test]
fn should_hide_from_a_payload_file_with_a_seeded_selection() {
    let out_dir = TempDir::new().unwrap();
    let input = out_dir.path().join("cat.gif");
    let data = out_dir.path().join("data.json");
    let first = out_dir.path().join("first.gif");
    let second = out_dir.path().join("second.gif");
    write_carrier(&input, 5, 32, 32);
    fs::write(&data, r#"{"city": "Köln", "tags": ["a b", "c/d"]}"#).unwrap();
    let options = CodecOptions::default().with_frame_seed(Some(7));

    let first_index = hide(&input, &first, &data, options.clone()).unwrap();
    let second_index = hide(&input, &second, &data, options).unwrap();

    assert_eq!(first_index, second_index);
    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());

    let secret = Carrier::from_file(&first).unwrap();
    let unveiled = secret.unveil().unwrap();
    assert_eq!(unveiled.frame_index, first_index);
    assert_eq!(unveiled.json, json!({"city": "Köln", "tags": ["a b", "c/d"]}));
}

#[test]
fn should_use_a_png_as_single_frame_carrier() {
    let out_dir = TempDir::new().unwrap();
    let input = out_dir.path().join("still.png");
    let output = out_dir.path().join("still-crypt.png");
    let extracted = out_dir.path().join("still.json");
    // many colours, PNG keeps them all
    let frame: RgbImage =
        ImageBuffer::from_fn(32, 32, |x, y| Rgb([(x * 8) as u8, (y * 8) as u8, (x ^ y) as u8]));
    frame.save(&input).unwrap();

    let frame_index = api::hide::prepare()
        .with_payload(br#"{"still": true}"#.to_vec())
        .with_image(&input)
        .with_output(&output)
        .execute()
        .unwrap();
    assert_eq!(frame_index, 0);

    let secret = Carrier::from_file(&output).unwrap();
    assert_eq!(secret.format, CarrierFormat::Png);
    assert_eq!(
        unveil(&output, &extracted).unwrap(),
        json!({"still": true})
    );
}

#[test]
fn should_keep_looking_past_a_frame_with_a_broken_payload() {
    let out_dir = TempDir::new().unwrap();
    let secret_file = out_dir.path().join("two.gif");
    let extracted = out_dir.path().join("two.json");
    let mut frames = frames(3, 20, 20);
    for (frame, text) in frames.iter_mut().zip(["not json", r#"{"b":2}"#]) {
        let data = Message::from_payload(text.as_bytes())
            .to_raw_data(&MarkerLengthCodec)
            .unwrap();
        std::io::Write::write_all(&mut LsbCodec::encoder(frame), &data).unwrap();
    }
    let mut carrier = Carrier::from_frames(frames, 0, 100);
    carrier.save_as(&secret_file).unwrap();

    let secret = Carrier::from_file(&secret_file).unwrap();
    let first = MarkerLengthCodec
        .decode(&mut LsbCodec::decoder(&secret.frames[0]))
        .unwrap();
    assert_eq!(first, b"not%20json");

    assert_eq!(unveil(&secret_file, &extracted).unwrap(), json!({"b": 2}));
}

#[test]
fn should_reject_unsupported_carriers() {
    let out_dir = TempDir::new().unwrap();
    let data = out_dir.path().join("data.json");
    fs::write(&data, "{}").unwrap();

    let result = hide(
        Path::new("cat.jpg"),
        &out_dir.path().join("out.gif"),
        &data,
        CodecOptions::default(),
    );
    assert!(matches!(result, Err(SteggyError::UnsupportedMedia)));
}

#[test]
fn should_never_report_success_for_a_payload_the_gif_loses() {
    let out_dir = TempDir::new().unwrap();
    let input = out_dir.path().join("colourful.gif");
    let output = out_dir.path().join("colourful-crypt.gif");
    let extracted = out_dir.path().join("colourful.json");
    // 250 colours with even reds, exactly representable until red LSBs get flipped
    let colourful: Vec<RgbImage> = (0..3)
        .map(|_| {
            ImageBuffer::from_fn(20, 20, |x, y| {
                let k = (x + 20 * y) % 250;
                Rgb([(k % 125 * 2) as u8, (k / 125 * 100) as u8, 7])
            })
        })
        .collect();
    let mut carrier = Carrier::from_frames(colourful, 0, 100);
    carrier.save_as(&input).unwrap();
    assert_eq!(Carrier::from_file(&input).unwrap().frames, carrier.frames);

    let result = api::hide::prepare()
        .with_payload(br#"{"a":1}"#.to_vec())
        .with_image(&input)
        .with_output(&output)
        .using_selector(|_: usize| -> usize { 1 })
        .execute();

    match result {
        Err(SteggyError::PayloadNotPreserved { frame_index }) => {
            assert_eq!(frame_index, 1);
            assert!(!output.exists());
        }
        Ok(frame_index) => {
            assert_eq!(frame_index, 1);
            assert_eq!(unveil(&output, &extracted).unwrap(), json!({"a": 1}));
        }
        Err(e) => panic!("unexpected error {e}"),
    }
}
