use pathquill::cache::FilesCache;
use pathquill::config::Config;
use pathquill::path::{FilePath, Path};
use tempfile::TempDir;

// Kept alone in its own binary since it points HOME at a temporary folder.
#[test]
fn test_open_default_reads_user_config() {
    let home = TempDir::new().unwrap();
    std::env::set_var("HOME", home.path());

    let cache_folder = home.path().join("site-cache");
    let config = Config {
        cache_folder: cache_folder.to_string_lossy().into_owned(),
        compress: true,
        ..Config::default()
    };
    config.save_to(&Config::config_path().unwrap()).unwrap();

    let mut cache = FilesCache::open_default().unwrap();
    assert_eq!(cache.cache_folder(), &FilePath::from_std_path(&cache_folder));

    let source = FilePath::from_std_path(home.path()).concat("page.txt");
    source.write_file_contents("hello").unwrap();
    let cached = cache.cache_file(&source).unwrap();
    assert_eq!(cached.file_extension(), "gz");
    assert_eq!(cache.read_file_contents(&source).unwrap(), "hello");
}
