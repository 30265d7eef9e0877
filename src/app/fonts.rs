use crate::library::logger::interface::Logger;
use std::path::Path;
use std::sync::Arc;

const CUSTOM_FONT: &str = "custom";

/// Puts the font first for proportional text and last as a monospace fallback.
pub fn font_definitions(font_bytes: Vec<u8>) -> egui::FontDefinitions {
    let mut fonts = egui::FontDefinitions::default();
    fonts.font_data.insert(
        CUSTOM_FONT.to_owned(),
        egui::FontData::from_owned(font_bytes),
    );
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, CUSTOM_FONT.to_owned());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(CUSTOM_FONT.to_owned());
    fonts
}

pub fn install_font(
    ctx: &egui::Context,
    font_path: Option<&Path>,
    logger: &Arc<dyn Logger + Send + Sync>,
) {
    let Some(path) = font_path else {
        return;
    };

    match std::fs::read(path) {
        Ok(bytes) => {
            ctx.set_fonts(font_definitions(bytes));
            let _ = logger.info(&format!("Using font {}", path.display()));
        }
        Err(e) => {
            let _ = logger.error(&format!(
                "Could not read font {}, keeping default fonts: {}",
                path.display(),
                e
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_font_is_preferred() {
        let fonts = font_definitions(vec![0, 1, 2, 3]);

        assert!(fonts.font_data.contains_key(CUSTOM_FONT));
        assert_eq!(
            fonts.families[&egui::FontFamily::Proportional].first().map(String::as_str),
            Some(CUSTOM_FONT)
        );
        assert_eq!(
            fonts.families[&egui::FontFamily::Monospace].last().map(String::as_str),
            Some(CUSTOM_FONT)
        );
    }
}
