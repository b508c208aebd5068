use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Lists the chat-log files directly contained in a directory.
///
/// Returns full paths, `.html` files first and `.txt` files second, each
/// group sorted by name so enumeration order is stable across runs.
/// Subdirectories and other extensions are ignored.
pub(crate) fn list_log_files<P: AsRef<Path>>(dir: P) -> io::Result<Vec<PathBuf>> {
	let mut html = Vec::new();
	let mut txt = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();
		if !path.is_file() {
			continue;
		}
		match path.extension().and_then(|e| e.to_str()) {
			Some("html") => html.push(path),
			Some("txt") => txt.push(path),
			_ => (),
		}
	}

	html.sort();
	txt.sort();
	html.extend(txt);
	Ok(html)
}
