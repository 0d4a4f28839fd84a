use std::fs::{File, Permissions};
use std::io::{BufWriter, Write};
use std::path::Path;

use enum_dispatch::enum_dispatch;
use image::RgbImage;
use log::{debug, error};
use tempfile::NamedTempFile;

use super::audio::PcmAudio;
use super::video::Y4mVideo;
use super::{image as img, LsbCarrier, Persist};
use crate::result::Result;
use crate::ShroudError;

/// the kind of carrier, derived from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Audio,
    Video,
}

impl MediaKind {
    pub fn from_path(file: &Path) -> Result<Self> {
        let ext = file
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .ok_or(ShroudError::UnsupportedMedia)?;

        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "bmp" => Ok(Self::Image),
            "wav" => Ok(Self::Audio),
            "y4m" => Ok(Self::Video),
            _ => Err(ShroudError::UnsupportedMedia),
        }
    }
}

/// a media container for steganography
#[enum_dispatch(LsbCarrier)]
#[derive(Debug)]
pub enum Media {
    Image(RgbImage),
    Audio(PcmAudio),
    Video(Y4mVideo),
}

impl Media {
    pub fn from_file(f: &Path) -> Result<Self> {
        let media = match MediaKind::from_path(f)? {
            MediaKind::Image => Self::Image(img::open_rgb(f)?),
            MediaKind::Audio => Self::Audio(PcmAudio::from_file(f)?),
            MediaKind::Video => Self::Video(Y4mVideo::from_file(f)?),
        };
        debug!(
            "opened {:?} carrier {f:?} with a capacity of {} bits",
            media.kind(),
            media.capacity()
        );

        Ok(media)
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            Media::Image(_) => MediaKind::Image,
            Media::Audio(_) => MediaKind::Audio,
            Media::Video(_) => MediaKind::Video,
        }
    }

    /// hides the framed bits, on error the media is left untouched
    pub fn hide_data(&mut self, bits: &[bool]) -> Result<&mut Self> {
        self.hide_bits(bits).map_err(|e| {
            error!("Error hiding data in {:?} media: {e}", self.kind());
            e
        })?;

        Ok(self)
    }

    /// all LSBs of the carrier, the framed message is somewhere in there
    pub fn unveil_data(&self) -> Vec<bool> {
        self.unveil_bits()
    }

    fn write_to<W: Write + std::io::Seek>(&self, writer: &mut W, target: &Path) -> Result<()> {
        match self {
            Media::Image(i) => img::write_rgb(i, writer, img::lossless_format(target)?),
            Media::Audio(a) => a.write_to(writer),
            Media::Video(v) => v.write_to(writer),
        }
    }
}

impl Persist for Media {
    /// writes into a temporary file next to `file` that replaces `file` only once complete
    fn save_as(&mut self, file: &Path) -> Result<()> {
        if MediaKind::from_path(file)? != self.kind() {
            error!("Target {file:?} does not match a {:?} media", self.kind());
            return Err(ShroudError::UnsupportedMedia);
        }
        if let Media::Image(_) = self {
            img::lossless_format(file)?;
        }

        let dir = match file.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).map_err(|source| {
            error!("Error creating a temporary file in {dir:?}: {source}");
            ShroudError::WriteError { source }
        })?;
        {
            let mut writer: BufWriter<&mut File> = BufWriter::new(tmp.as_file_mut());
            self.write_to(&mut writer, file)?;
            writer
                .flush()
                .map_err(|source| ShroudError::WriteError { source })?;
        }

        if let Some(permissions) = output_permissions(file) {
            tmp.as_file()
                .set_permissions(permissions)
                .map_err(|source| ShroudError::WriteError { source })?;
        }
        tmp.persist(file).map_err(|e| {
            error!("Error creating file {file:?}: {}", e.error);
            ShroudError::WriteError { source: e.error }
        })?;

        Ok(())
    }
}

/// the permissions of the file that gets replaced, temp files are private otherwise
fn output_permissions(file: &Path) -> Option<Permissions> {
    match std::fs::metadata(file) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => new_file_permissions(),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use image::Rgb;
    use tempfile::TempDir;

    use super::*;
    use crate::media::video::y4m_stream::tests::y4m_bytes;

    #[test]
    fn should_derive_the_kind_from_the_extension() {
        assert_eq!(MediaKind::from_path(Path::new("a.PNG")).unwrap(), MediaKind::Image);
        assert_eq!(MediaKind::from_path(Path::new("a.jpeg")).unwrap(), MediaKind::Image);
        assert_eq!(MediaKind::from_path(Path::new("a.bmp")).unwrap(), MediaKind::Image);
        assert_eq!(MediaKind::from_path(Path::new("a.wav")).unwrap(), MediaKind::Audio);
        assert_eq!(MediaKind::from_path(Path::new("a.y4m")).unwrap(), MediaKind::Video);
        assert!(matches!(
            MediaKind::from_path(Path::new("a.mp3")),
            Err(ShroudError::UnsupportedMedia)
        ));
        assert!(matches!(
            MediaKind::from_path(Path::new("Cargo")),
            Err(ShroudError::UnsupportedMedia)
        ));
    }

    #[test]
    fn should_fail_for_unsupported_media_files() {
        assert!(matches!(
            Media::from_file(Path::new("Cargo.toml")),
            Err(ShroudError::UnsupportedMedia)
        ));
    }

    #[test]
    fn should_hide_save_and_reopen_an_image() {
        let dir = TempDir::new().unwrap();
        let carrier = dir.path().join("carrier.png");
        let target = dir.path().join("target.png");
        RgbImage::from_fn(4, 4, |x, y| Rgb([x as u8 * 10, y as u8 * 10, 200]))
            .save(&carrier)
            .unwrap();

        let bits = vec![true, false, true, true, false, false, true];
        let mut media = Media::from_file(&carrier).unwrap();
        assert_eq!(media.kind(), MediaKind::Image);
        assert_eq!(media.capacity(), 48);
        media.hide_data(&bits).unwrap().save_as(&target).unwrap();

        let unveiled = Media::from_file(&target).unwrap().unveil_data();
        assert_eq!(&unveiled[..bits.len()], &bits[..]);
        assert_eq!(dir.path().read_dir().unwrap().count(), 2, "no temp files left");
    }

    #[test]
    fn should_refuse_a_lossy_or_mismatching_target() {
        let dir = TempDir::new().unwrap();
        let mut media = Media::Image(RgbImage::new(2, 2));

        for target in ["out.jpg", "out.wav", "out.txt"] {
            assert!(matches!(
                media.save_as(&dir.path().join(target)),
                Err(ShroudError::UnsupportedMedia)
            ));
        }
        assert_eq!(dir.path().read_dir().unwrap().count(), 0);
    }

    #[test]
    fn should_not_touch_the_media_when_it_is_too_small() {
        let mut media = Media::Image(RgbImage::new(2, 2));
        assert!(matches!(
            media.hide_data(&[true; 13]),
            Err(ShroudError::CapacityExceeded {
                required: 13,
                capacity: 12
            })
        ));
        assert!(media.unveil_data().iter().all(|b| !b));
    }

    #[test]
    fn should_overwrite_a_video_in_place() {
        let dir = TempDir::new().unwrap();
        let video = dir.path().join("clip.y4m");
        std::fs::write(&video, y4m_bytes(4, 4, 3)).unwrap();

        let mut media = Media::from_file(&video).unwrap();
        assert_eq!(media.kind(), MediaKind::Video);
        media.hide_data(&[true; 48]).unwrap().save_as(&video).unwrap();

        assert_eq!(Media::from_file(&video).unwrap().unveil_data(), vec![true; 48]);
    }

    #[cfg(unix)]
    #[test]
    fn should_write_a_new_file_readable_by_others() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let target = dir.path().join("target.png");
        Media::Image(RgbImage::new(2, 2)).save_as(&target).unwrap();

        let mode = std::fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn should_keep_the_permissions_of_an_overwritten_file() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let audio = dir.path().join("clip.wav");
        std::fs::write(
            &audio,
            crate::media::audio::pcm::tests::wav_bytes(
                hound::WavSpec {
                    channels: 1,
                    sample_rate: 8000,
                    bits_per_sample: 16,
                    sample_format: hound::SampleFormat::Int,
                },
                8,
            ),
        )
        .unwrap();
        std::fs::set_permissions(&audio, Permissions::from_mode(0o640)).unwrap();

        let mut media = Media::from_file(&audio).unwrap();
        media.hide_data(&[true; 3]).unwrap().save_as(&audio).unwrap();

        let mode = std::fs::metadata(&audio).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o640);
    }
}
