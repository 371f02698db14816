use std::{fs::File, io::BufReader, path::PathBuf};

use otter_simplify::{context::Context, types::err::ErrorKind};
use xz2::read::XzDecoder;

pub enum LoadError {
    FailedToOpen(PathBuf),
    Parse(ErrorKind),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FailedToOpen(path) => write!(f, "Failed to open {path:?}."),
            Self::Parse(e) => write!(f, "Parse error: {e}."),
        }
    }
}

/// Reads the DIMACS file at `path` into the context, decompressing if the file has an `xz` extension.
pub fn load_dimacs(context: &mut Context, path: &PathBuf) -> Result<(), LoadError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return Err(LoadError::FailedToOpen(path.clone())),
    };

    let parse_report = match &path.extension() {
        Some(extension) if *extension == "xz" => {
            context.read_dimacs(BufReader::new(XzDecoder::new(&file)))
        }
        _ => context.read_dimacs(BufReader::new(&file)),
    };

    match parse_report {
        Ok(_) => Ok(()),
        Err(e) => Err(LoadError::Parse(e)),
    }
}

/// Propagates, cleans, probes, and cleans again.
pub fn simplify(context: &mut Context) -> Result<(), ErrorKind> {
    context.propagate()?;
    context.clean(true)?;

    let outcome = context.probe(true)?;
    println!("c Probing: {outcome:?}");

    context.clean(true)?;
    Ok(())
}
