mod directory;

pub use directory::DirectoryDownloadControl;
