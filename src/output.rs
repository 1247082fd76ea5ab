use serde::Serialize;
use std::io::Write;

use geocatalog::{default_crs, CrsOption, ExtensionKind, FiletypeOption, FiletypeOptions};

use crate::config::OutputFormat;

pub fn write_filetypes<W: Write>(
    out: &mut W,
    format: OutputFormat,
    options: &FiletypeOptions,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, options),
        OutputFormat::Text => {
            let width = options.keys().map(str::len).max().unwrap_or(0);
            for (key, option) in options.iter() {
                write_filetype_line(out, key, option, width)?;
            }
            Ok(())
        }
    }
}

pub fn write_filetype<W: Write>(
    out: &mut W,
    format: OutputFormat,
    key: &str,
    option: &FiletypeOption,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, option),
        OutputFormat::Text => write_filetype_line(out, key, option, key.len()),
    }
}

pub fn write_crs_options<W: Write>(
    out: &mut W,
    format: OutputFormat,
    options: &[CrsOption],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, options),
        OutputFormat::Text => {
            let width = options.iter().map(|o| o.value.len()).max().unwrap_or(0);
            for option in options {
                write_crs_line(out, option, width)?;
            }
            Ok(())
        }
    }
}

pub fn write_crs<W: Write>(
    out: &mut W,
    format: OutputFormat,
    option: &CrsOption,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, option),
        OutputFormat::Text => write_crs_line(out, option, option.value.len()),
    }
}

fn write_filetype_line<W: Write>(
    out: &mut W,
    key: &str,
    option: &FiletypeOption,
    width: usize,
) -> anyhow::Result<()> {
    writeln!(
        out,
        "{key:<width$}  {:<14}  {}",
        option.label,
        describe_extensions(option)
    )?;
    Ok(())
}

fn write_crs_line<W: Write>(out: &mut W, option: &CrsOption, width: usize) -> anyhow::Result<()> {
    let marker = if option.value == default_crs().value {
        "  (default)"
    } else {
        ""
    };
    writeln!(out, "{:<width$}  {}{marker}", option.value, option.label)?;
    Ok(())
}

fn describe_extensions(option: &FiletypeOption) -> String {
    match option.extension_kind() {
        ExtensionKind::None => "(no extension)".to_string(),
        ExtensionKind::Unspecified => "(unspecified)".to_string(),
        ExtensionKind::Concrete => option
            .extensions
            .iter()
            .filter(|ext| !ext.is_empty())
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
