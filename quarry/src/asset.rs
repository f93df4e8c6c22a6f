use serde::{de::DeserializeOwned, Serialize};
use std::{
    collections::HashMap,
    fs::File,
    io::{Read, Write},
    path::{Path, PathBuf},
};

pub type BufReader = std::io::BufReader<File>;
pub type BufWriter = std::io::BufWriter<File>;

fn direction(write: &bool) -> &'static str {
    if *write {
        "writing"
    } else {
        "reading"
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("Error {} {}: {source}", direction(.write), .path.display())]
    Io {
        path: PathBuf,
        write: bool,
        source: std::io::Error,
    },
    #[error("Error {} {}: {source}", direction(.write), .path.display())]
    Yaml {
        path: PathBuf,
        write: bool,
        source: serde_yml::Error,
    },
    #[error("Error reading image {}: {source}", .path.display())]
    Png {
        path: PathBuf,
        source: png::DecodingError,
    },
    #[error("Asset {0} not found")]
    Missing(String),
}

impl AssetError {
    fn io(path: &Path, write: bool, source: std::io::Error) -> Self {
        AssetError::Io {
            path: path.to_owned(),
            write,
            source,
        }
    }
    fn yaml(path: &Path, write: bool, source: serde_yml::Error) -> Self {
        AssetError::Yaml {
            path: path.to_owned(),
            write,
            source,
        }
    }

    pub fn not_found(&self) -> bool {
        match self {
            AssetError::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            AssetError::Missing(_) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;

// Debug: expect working dir to be cargo project, so look for assets relative to that
#[cfg(debug_assertions)]
pub fn base_path() -> PathBuf {
    PathBuf::new()
}

// Release: look for assets relative to the executable
#[cfg(not(debug_assertions))]
pub fn base_path() -> PathBuf {
    let mut dir = std::env::current_exe().unwrap_or_default();
    dir.pop();
    dir
}

pub fn get_path(prefix: &str, asset_path: &str) -> PathBuf {
    let mut file_path = base_path();
    file_path.push(prefix);
    file_path.push(asset_path);
    file_path
}
pub fn open_reader(path: &Path) -> Result<BufReader> {
    log::debug!("Reading {}", path.display());
    let file = File::open(path).map_err(|e| AssetError::io(path, false, e))?;
    Ok(BufReader::new(file))
}
pub fn open_writer(path: &Path) -> Result<BufWriter> {
    log::debug!("Writing {}", path.display());
    let file = File::create(path).map_err(|e| AssetError::io(path, true, e))?;
    Ok(BufWriter::new(file))
}

pub fn create_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        log::info!("Creating directory {}", dir.display());
        std::fs::create_dir_all(dir).map_err(|e| AssetError::io(dir, true, e))?;
    }
    Ok(())
}

pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut reader = open_reader(path)?;
    let mut buf = Vec::new();
    reader
        .read_to_end(&mut buf)
        .map_err(|e| AssetError::io(path, false, e))?;
    Ok(buf)
}

pub fn read_yaml<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let reader = open_reader(path)?;
    serde_yml::from_reader(reader).map_err(|e| AssetError::yaml(path, false, e))
}
pub fn write_yaml<T>(path: &Path, value: &T) -> Result<()>
where
    T: Serialize,
{
    let mut writer = open_writer(path)?;
    serde_yml::to_writer(&mut writer, value).map_err(|e| AssetError::yaml(path, true, e))?;
    writer.flush().map_err(|e| AssetError::io(path, true, e))
}

pub fn load_yaml_file<T>(prefix: &str, file: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    read_yaml(&get_path(prefix, file))
}
pub fn load_yaml_file_or_default<T>(prefix: &str, file: &str) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let path = get_path(prefix, file);
    if path.exists() {
        read_yaml(&path)
    } else {
        log::info!("{} does not exist, using defaults instead", path.display());
        Ok(Default::default())
    }
}
pub fn save_yaml_file<T>(prefix: &str, file: &str, value: &T) -> Result<()>
where
    T: Serialize,
{
    write_yaml(&get_path(prefix, file), value)
}

/// Named byte buffers, e.g. the diagnostic overlay images.
pub trait AssetProvider {
    fn bytes(&mut self, name: &str) -> Result<&[u8]>;

    fn byte_len(&mut self, name: &str) -> Result<usize> {
        Ok(self.bytes(name)?.len())
    }
}

/// Buffers compiled into the binary.
#[derive(Default)]
pub struct StaticAssets {
    entries: HashMap<&'static str, &'static [u8]>,
}

impl StaticAssets {
    pub fn new(entries: &[(&'static str, &'static [u8])]) -> Self {
        StaticAssets {
            entries: entries.iter().copied().collect(),
        }
    }
    pub fn insert(&mut self, name: &'static str, bytes: &'static [u8]) {
        self.entries.insert(name, bytes);
    }
}

impl AssetProvider for StaticAssets {
    fn bytes(&mut self, name: &str) -> Result<&[u8]> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| AssetError::Missing(name.to_owned()))
    }
}

/// Files under a directory, read on first request and kept in memory.
pub struct DirectoryAssets {
    dir: PathBuf,
    cache: HashMap<String, Vec<u8>>,
}

impl DirectoryAssets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirectoryAssets {
            dir: dir.into(),
            cache: HashMap::new(),
        }
    }
    pub fn with_prefix(prefix: &str) -> Self {
        let mut dir = base_path();
        dir.push(prefix);
        Self::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
    pub fn evict(&mut self, name: &str) {
        self.cache.remove(name);
    }
}

impl AssetProvider for DirectoryAssets {
    fn bytes(&mut self, name: &str) -> Result<&[u8]> {
        if !self.cache.contains_key(name) {
            let data = read_bytes(&self.dir.join(name))?;
            self.cache.insert(name.to_owned(), data);
        }
        Ok(self.cache[name].as_slice())
    }
}

/// Resolution variants of the frame-rate overlay image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FpsImages {
    Sd,
    Hd,
    IpadHd,
}

impl FpsImages {
    pub const ALL: [FpsImages; 3] = [FpsImages::Sd, FpsImages::Hd, FpsImages::IpadHd];

    pub fn file_name(self) -> &'static str {
        match self {
            FpsImages::Sd => "fps_images.png",
            FpsImages::Hd => "fps_images-hd.png",
            FpsImages::IpadHd => "fps_images-ipadhd.png",
        }
    }
    pub fn for_content_scale(scale: f32) -> Self {
        if scale >= 4. {
            FpsImages::IpadHd
        } else if scale >= 2. {
            FpsImages::Hd
        } else {
            FpsImages::Sd
        }
    }

    pub fn load(self, provider: &mut dyn AssetProvider) -> Result<&[u8]> {
        provider.bytes(self.file_name())
    }
    pub fn len(self, provider: &mut dyn AssetProvider) -> Result<usize> {
        provider.byte_len(self.file_name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

/// Reads the dimensions from a PNG header without decoding pixels.
pub fn image_size(name: &str, bytes: &[u8]) -> Result<ImageSize> {
    let reader = png::Decoder::new(bytes)
        .read_info()
        .map_err(|source| AssetError::Png {
            path: PathBuf::from(name),
            source,
        })?;
    let info = reader.info();
    Ok(ImageSize {
        width: info.width,
        height: info.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn temp_dir(name: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("quarry-asset-{}-{}", name, std::process::id()));
        create_dir(&dir).unwrap();
        dir
    }

    fn encode_png(width: u32, height: u32) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            let data = vec![255u8; (width * height * 4) as usize];
            writer.write_image_data(&data).unwrap();
        }
        buf
    }

    #[test]
    fn static_assets_report_length() {
        static SD: [u8; 4] = [1, 2, 3, 4];
        let mut assets = StaticAssets::new(&[(FpsImages::Sd.file_name(), &SD[..])]);
        assert_eq!(FpsImages::Sd.len(&mut assets).unwrap(), 4);
        assert_eq!(FpsImages::Sd.load(&mut assets).unwrap(), &SD[..]);
        let missing = FpsImages::Hd.load(&mut assets).unwrap_err();
        assert!(missing.not_found());
        assert_eq!(missing.to_string(), "Asset fps_images-hd.png not found");
    }

    #[test]
    fn fps_variant_follows_content_scale() {
        assert_eq!(FpsImages::for_content_scale(1.), FpsImages::Sd);
        assert_eq!(FpsImages::for_content_scale(1.5), FpsImages::Sd);
        assert_eq!(FpsImages::for_content_scale(2.), FpsImages::Hd);
        assert_eq!(FpsImages::for_content_scale(3.), FpsImages::Hd);
        assert_eq!(FpsImages::for_content_scale(4.), FpsImages::IpadHd);
    }

    #[test]
    fn directory_assets_cache_reads() {
        let dir = temp_dir("cache");
        let png = encode_png(3, 2);
        std::fs::write(dir.join(FpsImages::Hd.file_name()), &png).unwrap();

        let mut assets = DirectoryAssets::new(dir.clone());
        let bytes = FpsImages::Hd.load(&mut assets).unwrap().to_vec();
        assert_eq!(bytes, png);
        assert_eq!(
            image_size("hd", &bytes).unwrap(),
            ImageSize {
                width: 3,
                height: 2
            }
        );

        std::fs::remove_file(dir.join(FpsImages::Hd.file_name())).unwrap();
        assert_eq!(FpsImages::Hd.len(&mut assets).unwrap(), png.len());
        assets.evict(FpsImages::Hd.file_name());
        assert!(FpsImages::Hd.load(&mut assets).unwrap_err().not_found());
    }

    #[test]
    fn garbage_is_not_an_image() {
        let error = image_size("junk.png", b"not a png").unwrap_err();
        assert!(matches!(error, AssetError::Png { .. }));
        assert!(error.to_string().starts_with("Error reading image junk.png"));
    }

    #[test]
    fn yaml_round_trip_and_errors() {
        #[derive(Serialize, Deserialize, PartialEq, Debug)]
        struct Settings {
            name: String,
            scale: f32,
        }

        let dir = temp_dir("yaml");
        let path = dir.join("settings.yaml");
        let settings = Settings {
            name: "overlay".to_owned(),
            scale: 2.,
        };
        write_yaml(&path, &settings).unwrap();
        assert_eq!(read_yaml::<Settings>(&path).unwrap(), settings);

        std::fs::write(&path, "name: [").unwrap();
        let error = read_yaml::<Settings>(&path).unwrap_err();
        assert!(matches!(error, AssetError::Yaml { write: false, .. }));

        let error = read_yaml::<Settings>(&dir.join("missing.yaml")).unwrap_err();
        assert!(error.not_found());
        assert!(error.to_string().starts_with("Error reading"));
    }
}
