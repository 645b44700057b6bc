use std::fs::File;
use std::io::{BufReader, BufWriter, Write as _};
use std::path::Path;

use anyhow::{Context, Result, bail};
use comfy_table::{Cell, Table};
use tracing::{info, info_span};

use parasweep_engine::{MemoryDesign, SweepOutcome, ValueRange, filename, run_sweep};
use parasweep_ingest::read_parameter_specs;
use parasweep_model::{ParameterSpec, SweepOptions, ValueTrail};

use crate::cli::{CheckArgs, ParamSelection, PlanArgs, SweepArgs};
use crate::summary::apply_table_style;

pub fn run_sweep_command(args: &SweepArgs) -> Result<SweepOutcome> {
    let specs = resolve_specs(&args.selection)?;
    let mut design = load_design(&args.model)?;
    let span = info_span!("sweep", model = %args.model.display());
    let _guard = span.enter();

    let mut options = SweepOptions::new(args.operation.kind())
        .with_stl_per_body(args.per_body)
        .with_restore(!args.no_restore);
    if let Some(dir) = &args.export_dir {
        options = options.with_export_dir(dir);
    }

    let outcome = run_sweep(&mut design, &specs, &options)?;
    if args.save {
        save_design(&args.model, &design)?;
        info!(model = %args.model.display(), "saved model state");
    }
    Ok(outcome)
}

pub fn run_plan(args: &PlanArgs) -> Result<()> {
    let specs = resolve_specs(&args.selection)?;
    if specs.is_empty() {
        bail!("the parameter source is empty");
    }
    for spec in &specs {
        spec.validate()?;
    }

    let rows = enumerate_plan(&specs);
    let mut table = Table::new();
    let mut header: Vec<Cell> = specs.iter().map(|spec| Cell::new(&spec.name)).collect();
    header.push(Cell::new("Artifact stem"));
    table.set_header(header);
    apply_table_style(&mut table);
    let shown = if args.limit == 0 {
        rows.len()
    } else {
        rows.len().min(args.limit)
    };
    for row in &rows[..shown] {
        let mut cells: Vec<Cell> = row.values.iter().map(Cell::new).collect();
        cells.push(Cell::new(&row.stem));
        table.add_row(cells);
    }
    println!("{table}");
    if shown < rows.len() {
        println!("... {} more", rows.len() - shown);
    }
    println!("{} combinations", rows.len());
    Ok(())
}

pub fn run_check(args: &CheckArgs) -> Result<()> {
    let specs = read_parameter_specs(&args.file)?;
    if specs.is_empty() {
        bail!("{} contains no parameter rows", args.file.display());
    }

    let mut table = Table::new();
    table.set_header(vec!["Row", "Name", "Start", "End", "Step", "Status"]);
    apply_table_style(&mut table);
    let mut invalid = 0usize;
    for (index, spec) in specs.iter().enumerate() {
        let status = match spec.validate() {
            Ok(()) => "ok".to_string(),
            Err(error) => {
                invalid += 1;
                error.to_string()
            }
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&spec.name),
            Cell::new(spec.start),
            Cell::new(spec.end),
            Cell::new(spec.step),
            Cell::new(status),
        ]);
    }
    println!("{table}");
    if invalid > 0 {
        bail!(
            "{invalid} invalid row(s) in {}; the source would be rejected",
            args.file.display()
        );
    }
    println!("{} parameter rows ok", specs.len());
    Ok(())
}

fn resolve_specs(selection: &ParamSelection) -> Result<Vec<ParameterSpec>> {
    if let Some(path) = &selection.csv {
        let specs = read_parameter_specs(path)?;
        if specs.is_empty() {
            bail!("{} contains no parameter rows", path.display());
        }
        return Ok(specs);
    }
    match (
        &selection.param,
        selection.start,
        selection.end,
        selection.step,
    ) {
        (Some(name), Some(start), Some(end), Some(step)) => {
            Ok(vec![ParameterSpec::new(name.clone(), start, end, step)])
        }
        _ => bail!("specify either --param with --start/--end/--step, or --csv"),
    }
}

fn load_design(path: &Path) -> Result<MemoryDesign> {
    let file =
        File::open(path).with_context(|| format!("failed to open model {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse model {}", path.display()))
}

fn save_design(path: &Path, design: &MemoryDesign) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to write model {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, design)
        .with_context(|| format!("failed to serialize model {}", path.display()))?;
    writer.write_all(b"\n")?;
    Ok(())
}

struct PlanRow {
    values: Vec<f64>,
    stem: String,
}

/// Depth-first enumeration of every combination a sweep would visit, with
/// the sanitized artifact stem each leaf would export under (no document
/// name prefix; that comes from the model at sweep time).
fn enumerate_plan(specs: &[ParameterSpec]) -> Vec<PlanRow> {
    fn descend(
        specs: &[ParameterSpec],
        index: usize,
        trail: &ValueTrail,
        values: &mut Vec<f64>,
        rows: &mut Vec<PlanRow>,
    ) {
        let prefix = filename::parent_prefix(specs, index, trail);
        for value in ValueRange::from_spec(&specs[index]) {
            let mut trail = trail.clone();
            trail.record(specs[index].name.clone(), value.to_string());
            values.push(value);
            if index + 1 == specs.len() {
                rows.push(PlanRow {
                    values: values.clone(),
                    stem: filename::artifact_stem(&prefix, value),
                });
            } else {
                descend(specs, index + 1, &trail, values, rows);
            }
            values.pop();
        }
    }

    let mut rows = Vec::new();
    descend(specs, 0, &ValueTrail::new(), &mut Vec::new(), &mut rows);
    rows
}
