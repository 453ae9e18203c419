//! `disk` and `process` commands: run a simulator over the sample workload
//! and render its result.

use super::interpreter::{Command, CommandOutput, CommandRegistry, Session};
use super::style::Line;
use crate::error::Result;
use crate::models::sample_processes;
use crate::scheduler::{process, DiskScheduler, TimelineKpi};
use crate::simulation::{Algorithm, CatalogEntry, Simulation};

/// Register `disk` and `process` into a registry.
pub fn register_scheduling_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(DiskCmd));
    reg.register(Box::new(ProcessCmd));
}

/// Renders every outcome of a simulation. `report` formats the output of a
/// completed run, shown under the "Simulating ..." header.
fn render_simulation<A, T, F>(sim: Simulation<A, T>, kind: &str, report: F) -> Vec<Line>
where
    A: Algorithm,
    F: FnOnce(T) -> Vec<Line>,
{
    match sim {
        Simulation::Completed { algorithm, output } => {
            let mut lines = vec![simulating_line(algorithm.name(), kind)];
            lines.extend(report(output));
            lines
        }
        Simulation::NotImplemented(algorithm) => vec![
            simulating_line(algorithm.name(), kind),
            Line::error(format!(
                "Algorithm {} visualization not yet implemented",
                algorithm.code()
            )),
        ],
        Simulation::Unknown { catalog } => catalog_lines(kind, &catalog),
    }
}

fn simulating_line(name: &str, kind: &str) -> Line {
    Line::info(format!("Simulating {name} {kind} scheduling..."))
}

fn catalog_lines(kind: &str, catalog: &[CatalogEntry]) -> Vec<Line> {
    let mut lines = vec![Line::info(format!("Available {kind} scheduling algorithms:"))];
    lines.extend(catalog.iter().map(|entry| Line::plain(entry.render())));
    lines
}

// ---------------------------------------------------------------------------
// disk
// ---------------------------------------------------------------------------

struct DiskCmd;
impl Command for DiskCmd {
    fn name(&self) -> &str {
        "disk"
    }
    fn description(&self) -> &str {
        "Disk scheduling algorithms"
    }
    fn usage(&self) -> &str {
        "disk <fcfs|sstf|scan|cscan|look|clook>"
    }
    fn execute(&self, args: &[&str], _session: &mut Session) -> Result<CommandOutput> {
        let identifier = args.first().copied().unwrap_or("");
        let sim = DiskScheduler::default().run(identifier);
        let lines = render_simulation(sim, "disk", |plan| {
            vec![
                Line::plain(format!("Seek sequence: {plan}")),
                Line::success(format!("Total seek operations: {}", plan.total_seek)),
            ]
        });
        Ok(CommandOutput::Text(lines))
    }
}

// ---------------------------------------------------------------------------
// process
// ---------------------------------------------------------------------------

struct ProcessCmd;
impl Command for ProcessCmd {
    fn name(&self) -> &str {
        "process"
    }
    fn description(&self) -> &str {
        "Process scheduling algorithms"
    }
    fn usage(&self) -> &str {
        "process <fcfs|sjf|priority|rr|srjf>"
    }
    fn execute(&self, args: &[&str], _session: &mut Session) -> Result<CommandOutput> {
        let identifier = args.first().copied().unwrap_or("");
        let processes = sample_processes();
        let sim = process::run(identifier, &processes)?;
        let lines = render_simulation(sim, "process", |timeline| {
            let kpi = TimelineKpi::calculate(&timeline, &processes);
            vec![
                Line::plain(format!("Execution timeline: {timeline}")),
                Line::success(format!("Average waiting time: {:.2}", kpi.avg_waiting_time)),
                Line::success(format!(
                    "Average turnaround time: {:.2}",
                    kpi.avg_turnaround_time
                )),
            ]
        });
        Ok(CommandOutput::Text(lines))
    }
}
