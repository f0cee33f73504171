//! Command handlers and text rendering

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use jobboard_application::JobBoard;
use jobboard_core::{
    BoardEvent, Builder, BuilderDraft, BuilderId, Job, JobDraft, JobId, JobStatus, StatusCounts,
    timestamp,
};
use std::fmt::Write as _;

#[derive(Subcommand, Debug)]
pub enum JobCommands {
    /// Add a job
    Add(AddJobArgs),

    /// Move a job to another status
    Status {
        /// Job id
        id: String,

        /// New status (pending, in-progress, touch-ups-1, touch-ups-2, ready, completed)
        #[arg(value_parser = parse_status)]
        status: JobStatus,
    },

    /// Remove a job
    #[command(alias = "delete")]
    Rm {
        /// Job id
        id: String,
    },

    /// List jobs, newest first
    #[command(alias = "ls")]
    List,
}

#[derive(Args, Debug)]
pub struct AddJobArgs {
    /// Job number, e.g. PJ-001
    pub job_number: String,

    /// Site address
    pub address: String,

    /// Initial status
    #[arg(short, long, value_parser = parse_status, default_value = "pending")]
    pub status: JobStatus,

    /// Free-form notes
    #[arg(short, long)]
    pub notes: Option<String>,

    /// Id of a registered builder
    #[arg(short, long)]
    pub builder: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum BuilderCommands {
    /// Add a builder
    Add {
        /// Builder or company name
        name: String,

        /// Phone number or email
        contact: String,
    },

    /// List builders, newest first
    #[command(alias = "ls")]
    List,
}

fn parse_status(s: &str) -> std::result::Result<JobStatus, String> {
    s.parse::<JobStatus>().map_err(|e| e.to_string())
}

pub fn run_job(board: &mut JobBoard, command: JobCommands) -> Result<String> {
    match command {
        JobCommands::Add(args) => {
            let mut draft = JobDraft::new(args.job_number, args.address).with_status(args.status);
            if let Some(notes) = args.notes {
                draft = draft.with_notes(notes);
            }
            if let Some(builder) = args.builder.filter(|b| !b.trim().is_empty()) {
                draft = draft.with_builder(BuilderId::new(builder.trim().to_string()));
            }

            let new_job = draft.validate().context("Invalid job")?;
            let job = board.jobs_mut().create_job(new_job);
            Ok(format!("Created job {} ({})", job.job_number, job.id))
        }
        JobCommands::Status { id, status } => {
            let id = JobId::new(id);
            match board.jobs_mut().update_status(&id, status) {
                Some(job) => Ok(format!("Job #{} is now {}", job.job_number, job.status.label())),
                None => Ok(format!("No job with id {}", id)),
            }
        }
        JobCommands::Rm { id } => {
            let id = JobId::new(id);
            match board.jobs_mut().delete_job(&id) {
                Some(job) => Ok(format!("Removed job #{}", job.job_number)),
                None => Ok(format!("No job with id {}", id)),
            }
        }
        JobCommands::List => Ok(render_jobs(board)),
    }
}

pub fn run_builder(board: &mut JobBoard, command: BuilderCommands) -> Result<String> {
    match command {
        BuilderCommands::Add { name, contact } => {
            let new_builder = BuilderDraft::new(name, contact)
                .validate()
                .context("Invalid builder")?;
            let builder = board.builders_mut().create_builder(new_builder);
            Ok(format!("Added builder {} ({})", builder.name, builder.id))
        }
        BuilderCommands::List => Ok(render_builders(board.builders().builders())),
    }
}

pub fn render_jobs(board: &JobBoard) -> String {
    let jobs = board.jobs().jobs();
    if jobs.is_empty() {
        return "No jobs yet.".to_string();
    }

    let mut out = String::new();
    for job in jobs {
        let _ = writeln!(out, "{}", render_job(board, job));
    }
    out.trim_end().to_string()
}

fn render_job(board: &JobBoard, job: &Job) -> String {
    let mut line = format!(
        "#{}  {}  [{}]\n    id: {}",
        job.job_number,
        job.address,
        job.status.label(),
        job.id
    );

    match board.builder_for(job) {
        Some(assigned) => {
            let name = assigned.name().unwrap_or("Unnamed builder");
            match assigned.contact() {
                Some(contact) => {
                    let _ = write!(line, "\n    builder: {} ({})", name, contact);
                }
                None => {
                    let _ = write!(line, "\n    builder: {}", name);
                }
            }
        }
        None => line.push_str("\n    builder: none"),
    }

    if let Some(notes) = &job.notes {
        let _ = write!(line, "\n    notes: {}", notes);
    }

    let _ = write!(
        line,
        "\n    created: {}  updated: {}",
        timestamp::format(&job.created_at),
        timestamp::format(&job.updated_at)
    );
    line
}

pub fn render_builders(builders: &[Builder]) -> String {
    if builders.is_empty() {
        return "No builders yet.".to_string();
    }

    builders
        .iter()
        .map(|b| format!("{}  {}  ({})", b.id, b.name, b.contact))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_stats(counts: &StatusCounts) -> String {
    let mut out = format!("Total: {}", counts.total);
    for (status, count) in counts.iter() {
        let _ = write!(out, "\n{}: {}", status.label(), count);
    }
    out
}

/// `<title>: <description>`
pub fn render_notification(event: &BoardEvent) -> String {
    format!("{}: {}", event.title(), event.description())
}
