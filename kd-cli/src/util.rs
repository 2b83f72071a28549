use std::io::{
    self,
    BufRead,
    Write,
};

use chrono::{
    DateTime,
    Utc,
};
use kd_core::errors::*;
use kd_core::k8s::GVK;
use kd_core::prelude::*;
use kd_dup::{
    DuplicableObject,
    DuplicateOpts,
    DuplicateRegistry,
    DuplicatedObject,
    Duplicator,
};

// Flags shared by all three duplicate subcommands; the defaults turn every
// container of the clone into an idle shell target.
#[derive(clap::Args)]
pub struct OverrideFlags {
    #[arg(
        long,
        value_delimiter = ',',
        default_value = DEFAULT_COMMAND_OVERRIDE,
        help = "override the command of each container in the duplicated pod"
    )]
    pub command_override: Vec<String>,

    #[arg(
        long,
        value_delimiter = ',',
        default_value = DEFAULT_ARGS_OVERRIDE,
        help = "override the args of each container in the duplicated pod"
    )]
    pub args_override: Vec<String>,

    #[arg(
        short,
        long,
        help = "start an interactive shell in the duplicated pod once it is ready"
    )]
    pub interactive: bool,
}

impl OverrideFlags {
    pub fn to_opts(&self) -> DuplicateOpts {
        DuplicateOpts {
            command: Some(self.command_override.clone()).filter(|c| !c.is_empty()),
            args: Some(self.args_override.clone()).filter(|a| !a.is_empty()),
            start_interactive_shell: self.interactive,
            ..Default::default()
        }
    }
}

// Shared body of the pod/deploy/statefulset subcommands: duplicate the named
// resource, or list the duplicable ones and let the user pick.
pub async fn run_duplicate(
    duplicator: &dyn Duplicator,
    registry: &mut DuplicateRegistry,
    gvk: &GVK,
    resource: &str,
    name: Option<&str>,
    namespace: &str,
    opts: &DuplicateOpts,
) -> EmptyResult {
    let obj = match name {
        Some(n) => DuplicableObject::new(n, namespace),
        None => {
            let objs = registry.list_duplicable(gvk, namespace).await?;
            select_duplicable(&objs, resource, namespace)?
        },
    };
    duplicator.duplicate(&obj, opts).await
}

// Minimal numbered selection prompt; no resources to choose from is an error
// here (unlike `list`, where it's a no-op).
pub fn select_duplicable(objs: &[DuplicableObject], resource: &str, namespace: &str) -> anyhow::Result<DuplicableObject> {
    if objs.is_empty() {
        bail!("no {resource} found in namespace {namespace:?}");
    }

    println!("Select a {resource} [{namespace}]:");
    for (i, obj) in objs.iter().enumerate() {
        println!("  {}) {}", i + 1, obj.name);
    }
    print!("Enter a number (1-{}): ", objs.len());
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    parse_selection(&answer, objs)
}

pub fn parse_selection(answer: &str, objs: &[DuplicableObject]) -> anyhow::Result<DuplicableObject> {
    let idx: usize = answer.trim().parse()?;
    ensure!((1..=objs.len()).contains(&idx), "selection {idx} is out of range");
    Ok(objs[idx - 1].clone())
}

// kubectl-style table for `list` and `cleanup` output
pub fn render_duplicated_table(objs: &[DuplicatedObject]) -> String {
    render_duplicated_table_at(objs, Utc::now())
}

pub(crate) fn render_duplicated_table_at(objs: &[DuplicatedObject], now: DateTime<Utc>) -> String {
    let mut rows = vec![vec![
        "NAMESPACE".to_string(),
        "KIND".to_string(),
        "NAME".to_string(),
        "AGE".to_string(),
    ]];
    for obj in objs {
        rows.push(vec![
            obj.namespace.clone(),
            obj.gvk.kind.clone(),
            obj.name.clone(),
            obj.creation_timestamp
                .as_ref()
                .map_or_else(|| "<unknown>".to_string(), |ts| format_age_at(ts, now)),
        ]);
    }

    let widths: Vec<usize> = (0..4)
        .map(|col| rows.iter().map(|row| row[col].len()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for row in rows {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:<w$}"))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub(crate) fn format_age_at(t: &metav1::Time, now: DateTime<Utc>) -> String {
    let age = now.signed_duration_since(t.0);
    if age.num_hours() >= 24 {
        format!("{}d", age.num_hours() / 24)
    } else if age.num_hours() >= 1 {
        format!("{}h", age.num_hours())
    } else if age.num_minutes() >= 1 {
        format!("{}m", age.num_minutes())
    } else {
        format!("{}s", age.num_seconds().max(0))
    }
}
