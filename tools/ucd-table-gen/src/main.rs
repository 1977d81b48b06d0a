// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::Write as FmtWrite;
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use indoc::writedoc;
use runescan::ucd::{CodepointProperties, PropertiesTable, load_from_directory};

const HELP: &str = "\
Usage: ucd-table-gen [options...] <ucd-data-directory>
  -h, --help            Prints help information
  --log                 Print per-file load timings to stderr

Emits the compressed two-stage property tables as Rust source on stdout,
in stage1/stage2/properties order.

The directory must be an unpacked copy of the Unicode Character Database:
  https://www.unicode.org/Public/UCD/latest/ucd/
(including the extracted/, auxiliary/ and emoji/ subdirectories).
";

fn main() -> ExitCode {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        eprint!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let arg_log = args.contains("--log");
    let arg_dir = match args.free_from_os_str(|s| -> Result<PathBuf, &'static str> { Ok(s.into()) })
    {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("ucd-table-gen: {err}");
            eprint!("{HELP}");
            return ExitCode::from(1);
        }
    };
    let arg_remaining = args.finish();
    if !arg_remaining.is_empty() {
        eprintln!("ucd-table-gen: unrecognized arguments: {arg_remaining:?}");
        eprint!("{HELP}");
        return ExitCode::from(1);
    }

    match run(&arg_dir, arg_log) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ucd-table-gen: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(dir: &Path, log: bool) -> anyhow::Result<()> {
    let mut stderr = std::io::stderr();
    let log: Option<&mut dyn IoWrite> = if log { Some(&mut stderr) } else { None };

    let table = load_from_directory(dir, log)
        .with_context(|| format!("loading UCD data from {}", dir.display()))?;

    let buf = generate_rust(&table, &dir.display().to_string());
    std::io::stdout().write_all(buf.as_bytes()).context("writing generated tables")?;
    Ok(())
}

fn generate_rust(table: &PropertiesTable, source: &str) -> String {
    let (stage1, stage2, properties) = table.as_parts();
    let total_size = 2 * stage1.len() + 2 * stage2.len() + 6 * properties.len();

    let mut buf = String::new();
    _ = writeln!(
        buf,
        "// BEGIN: Generated by ucd-table-gen on {}, from {}, {} bytes",
        chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        source,
        total_size,
    );
    _ = writeln!(
        buf,
        "use runescan::ucd::{{\n    \
            CodepointProperties, EastAsianWidth, EmojiSegmentationCategory, GeneralCategory,\n    \
            GraphemeClusterBreak, PropertiesTable, PropertyFlags, Script,\n\
         }};"
    );

    emit_u16_array(&mut buf, "STAGE1", stage1);
    emit_u16_array(&mut buf, "STAGE2", stage2);

    _ = writeln!(
        buf,
        "#[rustfmt::skip]\npub static PROPERTIES: [CodepointProperties; {}] = [",
        properties.len(),
    );
    for record in properties {
        _ = writeln!(buf, "    {},", format_record(record));
    }
    buf.push_str("];\n");

    _ = writedoc!(
        buf,
        "
        /// Rebuilds the property table from the embedded arrays.
        pub fn properties_table() -> PropertiesTable {{
            PropertiesTable::from_parts(STAGE1.to_vec(), STAGE2.to_vec(), PROPERTIES.to_vec())
                .expect(\"embedded tables are self-consistent\")
        }}
        "
    );

    buf.push_str("// END: Generated by ucd-table-gen\n");
    buf
}

fn emit_u16_array(buf: &mut String, name: &str, values: &[u16]) {
    _ = write!(buf, "#[rustfmt::skip]\npub static {}: [u16; {}] = [", name, values.len());
    for (i, &value) in values.iter().enumerate() {
        if i % 16 == 0 {
            buf.push_str("\n   ");
        }
        _ = write!(buf, " 0x{value:04x},");
    }
    buf.push_str("\n];\n");
}

// The enums derive Debug with variant names matching their definitions, so
// the records can be emitted as plain struct literals.
fn format_record(record: &CodepointProperties) -> String {
    format!(
        "CodepointProperties {{ \
            general_category: GeneralCategory::{:?}, \
            script: Script::{:?}, \
            east_asian_width: EastAsianWidth::{:?}, \
            grapheme_cluster_break: GraphemeClusterBreak::{:?}, \
            emoji_segmentation_category: EmojiSegmentationCategory::{:?}, \
            flags: PropertyFlags::from_bits(0x{:02x}) \
        }}",
        record.general_category,
        record.script,
        record.east_asian_width,
        record.grapheme_cluster_break,
        record.emoji_segmentation_category,
        record.flags.bits(),
    )
}
