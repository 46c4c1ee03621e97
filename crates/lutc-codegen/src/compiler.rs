//! Dataset compiler: classify → partition → encode → assemble documents.

use std::fs;
use std::path::{Path, PathBuf};

use lutc_types::{classify, CompileError, Dataset, Result, TypeDesc, Value};

use crate::emit::encode;

// ══════════════════════════════════════════════════════════════════════════════
// Public API
// ══════════════════════════════════════════════════════════════════════════════

/// Per-run configuration, threaded explicitly so independent compiler runs can
/// coexist in one process.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Name of the aggregating struct declared in the header.
    pub struct_name: String,
    /// Base name of the emitted file pair (`<stem>.hh` / `<stem>.cc`).
    pub file_stem: String,
}

impl CompileOptions {
    pub fn new(struct_name: impl Into<String>, file_stem: impl Into<String>) -> Self {
        Self {
            struct_name: struct_name.into(),
            file_stem: file_stem.into(),
        }
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self::new("Data", "data")
    }
}

/// The two output documents, fully buffered.
#[derive(Debug, Clone)]
pub struct CompiledData {
    /// Interface document: struct declaration, inline scalars, aggregate
    /// declarations.
    pub header: String,
    /// Definition document: out-of-line aggregate definitions.
    pub implementation: String,
    file_stem: String,
}

impl CompiledData {
    pub fn header_file_name(&self) -> String {
        format!("{}.hh", self.file_stem)
    }

    pub fn implementation_file_name(&self) -> String {
        format!("{}.cc", self.file_stem)
    }

    /// Write both documents into `dir`, staging through temporary siblings so
    /// a failure never leaves a partial pair behind.
    pub fn write_to(&self, dir: &Path) -> Result<(PathBuf, PathBuf)> {
        let header_path = dir.join(self.header_file_name());
        let impl_path = dir.join(self.implementation_file_name());
        let header_tmp = dir.join(format!("{}.hh.tmp", self.file_stem));
        let impl_tmp = dir.join(format!("{}.cc.tmp", self.file_stem));

        let staged = write_file(&header_tmp, &self.header)
            .and_then(|()| write_file(&impl_tmp, &self.implementation))
            .and_then(|()| rename_file(&header_tmp, &header_path))
            .and_then(|()| rename_file(&impl_tmp, &impl_path));
        if staged.is_err() {
            let _ = fs::remove_file(&header_tmp);
            let _ = fs::remove_file(&impl_tmp);
        }
        staged?;

        log::info!(
            "wrote {} and {}",
            header_path.display(),
            impl_path.display()
        );
        Ok((header_path, impl_path))
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| CompileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn rename_file(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|source| CompileError::Io {
        path: to.to_path_buf(),
        source,
    })
}

/// Compile a dataset into its header/implementation pair.
///
/// Any classification or encoding failure aborts the whole run; there is no
/// partial output.
pub fn compile(dataset: &Dataset, options: &CompileOptions) -> Result<CompiledData> {
    Compiler { dataset, options }.compile()
}

// ══════════════════════════════════════════════════════════════════════════════
// Compiler
// ══════════════════════════════════════════════════════════════════════════════

struct Compiler<'a> {
    dataset: &'a Dataset,
    options: &'a CompileOptions,
}

impl<'a> Compiler<'a> {
    fn compile(self) -> Result<CompiledData> {
        // Classify everything up front: a bad entry must fail the run before
        // any document text exists.
        let mut entries = Vec::with_capacity(self.dataset.len());
        for (name, value) in self.dataset.iter() {
            let desc = classify(name, value)?;
            log::debug!(
                "classified `{name}` as {desc} ({})",
                if desc.is_scalar() { "inline" } else { "out-of-line" }
            );
            entries.push((name, value, desc));
        }

        let header = self.emit_header(&entries)?;
        let implementation = self.emit_implementation(&entries)?;
        log::info!(
            "compiled {} entries: header {} bytes, implementation {} bytes",
            entries.len(),
            header.len(),
            implementation.len()
        );

        Ok(CompiledData {
            header,
            implementation,
            file_stem: self.options.file_stem.clone(),
        })
    }

    /// Interface document: every entry's type, scalars with inline literals.
    fn emit_header(&self, entries: &[(&str, &Value, TypeDesc)]) -> Result<String> {
        let mut out = String::new();
        out.push_str("#include \"numtypes.hh\"\n");
        out.push_str("#include \"buffer.hh\"\n\n");
        out.push_str("#pragma once\n\n");
        out.push_str("using namespace std;\n\n");
        out.push_str(&format!("struct {} {{\n", self.options.struct_name));
        for (name, value, desc) in entries {
            if desc.is_scalar() {
                let literal = encode(name, value, desc, 0)?;
                out.push_str(&format!("  static constexpr {desc} {name} = {literal};\n"));
            } else {
                out.push_str(&format!("  static const {desc} {name};\n"));
            }
        }
        out.push_str("};\n");
        Ok(out)
    }

    /// Definition document: one out-of-line definition per aggregate, in
    /// declaration order.
    fn emit_implementation(&self, entries: &[(&str, &Value, TypeDesc)]) -> Result<String> {
        let mut out = String::new();
        out.push_str(&format!("#include \"{}.hh\"\n\n", self.options.file_stem));
        out.push_str("using namespace std;\n\n");
        for (name, value, desc) in entries {
            if desc.is_scalar() {
                continue;
            }
            let literal = encode(name, value, desc, 1)?;
            out.push_str(&format!("/* {name} */\n"));
            out.push_str(&format!(
                "const {desc} {}::{name} = {literal};\n\n",
                self.options.struct_name
            ));
        }
        Ok(out)
    }
}
