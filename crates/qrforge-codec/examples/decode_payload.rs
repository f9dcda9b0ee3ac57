//! Example decoding a handful of scanned QR payloads.
//!
//! Prints the detected content type, the decoded value, and the canonical
//! text each value would be re-encoded as.
//!
//! Run with: `cargo run --package qrforge-codec --example decode_payload`

use qrforge_codec::{QrContent, detect};

const SCANNED: &[&str] = &[
    "WIFI:T:WPA;S:MyNetwork;P:password123;;",
    "geo:37.7749,-122.4194",
    "MECARD:N:Doe\\,John;TEL:+15551234567;EMAIL:john@example.com;;",
    "smsto:+15550100:Running late",
    "bitcoin:1BoatSLRHtKNngkdXEeobR76b53LETtpyT?amount=0.005",
    "just some text",
];

fn main() {
    println!("=== QR payload decoding ===\n");

    for text in SCANNED {
        let content = QrContent::decode(text);
        println!("Scanned:  {text}");
        println!("Detected: {}", detect(text));
        println!("Decoded:  {content:?}");
        println!("Encoded:  {}\n", content.encode());
    }
}
