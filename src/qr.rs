//! Terminal QR rendering of a passphrase.

use crate::error::{PassphraseError, Result};
use qrcode::render::unicode::Dense1x2;
use qrcode::{EcLevel, QrCode};

/// Low error correction keeps the code small; two modules per character row.
pub fn render_qr(phrase: &str, inverse: bool) -> Result<String> {
    let code = QrCode::with_error_correction_level(phrase.as_bytes(), EcLevel::L)
        .map_err(|e| PassphraseError::QrCode(e.to_string()))?;

    let (dark, light) = if inverse {
        (Dense1x2::Light, Dense1x2::Dark)
    } else {
        (Dense1x2::Dark, Dense1x2::Light)
    };

    Ok(code
        .render::<Dense1x2>()
        .dark_color(dark)
        .light_color(light)
        .quiet_zone(true)
        .build())
}
