use std::path::PathBuf;

use anyhow::{Context, Result, ensure};

/// One decoded animation frame, straight RGBA8.
#[derive(Debug)]
pub struct Sprite {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// The loaded walk cycle, indexed by the player's current frame.
#[derive(Debug)]
pub struct FrameSet {
    frames: Vec<Sprite>,
}

impl FrameSet {
    pub fn new(frames: Vec<Sprite>) -> Self {
        Self { frames }
    }

    pub fn get(&self, index: usize) -> Option<&Sprite> {
        self.frames.get(index)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

/// Frame-to-file mapping. The original demo points every animation slot at
/// the same image; `uniform` reproduces that, while the mapping stays
/// injectable so distinct per-frame art is a config change, not a code change.
pub struct AssetConfig {
    pub frame_paths: Vec<PathBuf>,
}

impl AssetConfig {
    pub fn uniform(path: impl Into<PathBuf>, count: usize) -> Self {
        let path = path.into();
        Self {
            frame_paths: vec![path; count],
        }
    }
}

/// Decodes every configured frame before the loop starts. Any failure is
/// reported with the offending path so the caller can surface it on screen.
pub fn load_frames(config: &AssetConfig) -> Result<FrameSet> {
    ensure!(!config.frame_paths.is_empty(), "no animation frames configured");

    let mut frames = Vec::with_capacity(config.frame_paths.len());
    for path in &config.frame_paths {
        let img = image::open(path)
            .with_context(|| format!("loading animation frame {}", path.display()))?
            .to_rgba8();
        let (width, height) = img.dimensions();
        frames.push(Sprite {
            width,
            height,
            rgba: img.into_raw(),
        });
    }

    let frames = FrameSet::new(frames);
    log::info!("loaded {} animation frames", frames.len());
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_config_repeats_one_path() {
        let config = AssetConfig::uniform("assets/walk.png", 5);
        assert_eq!(config.frame_paths.len(), 5);
        assert!(
            config
                .frame_paths
                .iter()
                .all(|p| p == &PathBuf::from("assets/walk.png"))
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let config = AssetConfig::uniform("assets/definitely-not-here.png", 5);
        let err = load_frames(&config).unwrap_err();
        assert!(err.to_string().contains("definitely-not-here.png"));
    }

    #[test]
    fn empty_config_is_an_error() {
        let config = AssetConfig {
            frame_paths: Vec::new(),
        };
        assert!(load_frames(&config).is_err());
    }

    #[test]
    fn decodes_every_configured_frame() {
        let path = std::env::temp_dir().join(format!("strider-frame-{}.png", std::process::id()));
        let img = image::RgbaImage::from_pixel(4, 6, image::Rgba([10, 20, 30, 255]));
        img.save(&path).unwrap();

        let frames = load_frames(&AssetConfig::uniform(&path, 5)).unwrap();
        assert_eq!(frames.len(), 5);
        let first = frames.get(0).unwrap();
        assert_eq!((first.width, first.height), (4, 6));
        assert_eq!(first.rgba.len(), 4 * 6 * 4);
        assert!(frames.get(5).is_none());

        let _ = std::fs::remove_file(&path);
    }
}
