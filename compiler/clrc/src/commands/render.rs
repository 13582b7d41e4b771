use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clr_codegen::{render_to, CodeNode, Emitter, WriteEmitter};

use super::read_json;
use crate::error::DriverError;

/// `clrc render <tree.json> [-o <file>]`: render a serialized code tree.
pub fn render(args: &[String], out: &mut impl Write) -> Result<(), DriverError> {
    let mut input = None;
    let mut output = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-o" | "--output" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| DriverError::usage("missing value for `-o`"))?;
                output = Some(PathBuf::from(path));
            }
            arg if arg.starts_with('-') => {
                return Err(DriverError::usage(format!("unknown option `{arg}`")));
            }
            arg if input.is_none() => input = Some(PathBuf::from(arg)),
            arg => return Err(DriverError::usage(format!("unexpected argument `{arg}`"))),
        }
        i += 1;
    }
    let input = input.ok_or_else(|| DriverError::usage("usage: clrc render <tree.json> [-o <file>]"))?;

    let tree: CodeNode = read_json(&input)?;
    match output {
        Some(path) => write_file(&path, &tree),
        None => {
            let mut emitter = WriteEmitter::new(&mut *out);
            render_to(&tree, &mut emitter);
            emitter.emit_newline();
            emitter.finish()?;
            Ok(())
        }
    }
}

fn write_file(path: &Path, tree: &CodeNode) -> Result<(), DriverError> {
    let wrap = |source| DriverError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(wrap)?;
    let mut emitter = WriteEmitter::new(BufWriter::new(file));
    render_to(tree, &mut emitter);
    emitter.emit_newline();
    emitter.finish().map_err(wrap)?;
    Ok(())
}
