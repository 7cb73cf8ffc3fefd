//! Roster command line
//!
//! Subcommands generate mock batches, classify renewal dates and print the
//! dashboard's headline figures. Output goes to the supplied writer; logs go
//! to stderr through `tracing`.

#![allow(missing_docs)]

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use roster_core::{
    parse_calendar_date, Application, Clock, Member, MemberFilter, MemberStatus,
    MemberWithRenewalStatus, MembershipTier, RenewalStatus, RenewalSummary, RosterSummary,
    SystemClock, TierBreakdown,
};
use roster_synth::{SynthConfig, Synthesizer};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber; `RUST_LOG` overrides the `info` default
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // a second call keeps the subscriber already installed
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn batch_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("count")
            .long("count")
            .value_parser(value_parser!(usize))
            .help("Number of records to generate (defaults to the config value)"),
    )
    .arg(
        Arg::new("seed")
            .long("seed")
            .value_parser(value_parser!(u64))
            .help("Random seed for reproducibility"),
    )
    .arg(
        Arg::new("config")
            .long("config")
            .value_parser(value_parser!(PathBuf))
            .help("TOML synthesis config"),
    )
    .arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Output as JSON"),
    )
}

fn today_arg() -> Arg {
    Arg::new("today")
        .long("today")
        .help("Evaluate renewals as of this date (YYYY-MM-DD); defaults to the system date")
}

/// Command definition
#[must_use]
pub fn build_cli() -> Command {
    Command::new("roster")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Membership roster synthesis and renewal reports")
        .subcommand_required(true)
        .subcommand(
            batch_args(Command::new("members").about("Generate mock members"))
                .arg(Arg::new("status").long("status").help("Only members with this status"))
                .arg(Arg::new("tier").long("tier").help("Only members in this tier"))
                .arg(Arg::new("search").long("search").help("Case-insensitive text search")),
        )
        .subcommand(batch_args(Command::new("applications").about("Generate mock applications")))
        .subcommand(
            batch_args(Command::new("renewals").about("Generate members with renewal status"))
                .arg(today_arg())
                .arg(
                    Arg::new("status")
                        .long("status")
                        .help("Only this renewal bucket (past_due, due_soon, upcoming, renewed)"),
                ),
        )
        .subcommand(
            Command::new("classify")
                .about("Classify a single renewal date")
                .arg(Arg::new("date").required(true).help("Renewal date (YYYY-MM-DD)"))
                .arg(today_arg()),
        )
        .subcommand(
            batch_args(Command::new("summary").about("Print roster and renewal headline figures"))
                .arg(today_arg()),
        )
}

fn synth_config(args: &ArgMatches) -> Result<SynthConfig> {
    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => SynthConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SynthConfig::default(),
    };
    if let Some(&seed) = args.get_one::<u64>("seed") {
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn today(args: &ArgMatches) -> Result<NaiveDate> {
    match args.get_one::<String>("today") {
        Some(text) => parse_calendar_date(text).context("parsing --today"),
        None => Ok(SystemClock.today()),
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn member_line(m: &Member) -> String {
    format!(
        "{:<12} {:<36} {:<17} ${:>6} {:<9} renews {}",
        m.membership_id,
        m.business_name,
        m.membership_tier.as_str(),
        m.membership_price,
        m.status.as_str(),
        m.renewal_date
    )
}

fn application_line(a: &Application) -> String {
    format!(
        "{:<11} {:<36} {:<17} {:<14} {}",
        a.application_id,
        a.business_name,
        a.requested_tier.as_str(),
        a.status.as_str(),
        a.reviewed_by.as_deref().unwrap_or("-")
    )
}

fn renewal_line(m: &MemberWithRenewalStatus) -> String {
    format!("{:<9} {}", m.renewal_status.as_str(), member_line(&m.member))
}

/// Dispatch a parsed command line, writing results to `out`
///
/// # Errors
/// Config, date or filter problems, and write failures on `out`.
pub fn run<W: Write>(matches: &ArgMatches, out: &mut W) -> Result<()> {
    match matches.subcommand() {
        Some(("members", args)) => run_members(args, out),
        Some(("applications", args)) => run_applications(args, out),
        Some(("renewals", args)) => run_renewals(args, out),
        Some(("classify", args)) => run_classify(args, out),
        Some(("summary", args)) => run_summary(args, out),
        Some((other, _)) => bail!("unknown subcommand: {other}"),
        None => bail!("no subcommand given"),
    }
}

fn member_batch(args: &ArgMatches) -> Result<Vec<Member>> {
    let config = synth_config(args)?;
    let count = args.get_one::<usize>("count").copied().unwrap_or(config.member_count);
    tracing::info!(count, seed = ?config.seed, "generating member batch");
    Ok(Synthesizer::from_config(config).members(count))
}

fn run_members<W: Write>(args: &ArgMatches, out: &mut W) -> Result<()> {
    let members = member_batch(args)?;

    let mut filter = MemberFilter::new();
    if let Some(status) = args.get_one::<String>("status") {
        filter = filter.with_status(status.parse::<MemberStatus>()?);
    }
    if let Some(tier) = args.get_one::<String>("tier") {
        filter = filter.with_tier(tier.parse::<MembershipTier>()?);
    }
    if let Some(search) = args.get_one::<String>("search") {
        filter = filter.with_search(search.as_str());
    }
    let selected = filter.apply(&members)?;

    if args.get_flag("json") {
        return write_json(out, &selected);
    }
    for member in selected {
        writeln!(out, "{}", member_line(member))?;
    }
    Ok(())
}

fn run_applications<W: Write>(args: &ArgMatches, out: &mut W) -> Result<()> {
    let config = synth_config(args)?;
    let count = args.get_one::<usize>("count").copied().unwrap_or(config.application_count);
    let applications = Synthesizer::from_config(config).applications(count);

    if args.get_flag("json") {
        return write_json(out, &applications);
    }
    for application in &applications {
        writeln!(out, "{}", application_line(application))?;
    }
    Ok(())
}

fn run_renewals<W: Write>(args: &ArgMatches, out: &mut W) -> Result<()> {
    let today = today(args)?;
    let wanted = args
        .get_one::<String>("status")
        .map(|s| s.parse::<RenewalStatus>())
        .transpose()?;
    let annotated: Vec<MemberWithRenewalStatus> =
        roster_core::with_renewal_status(member_batch(args)?, today)
            .into_iter()
            .filter(|m| wanted.map_or(true, |w| m.renewal_status == w))
            .collect();

    if args.get_flag("json") {
        return write_json(out, &annotated);
    }
    for entry in &annotated {
        writeln!(out, "{}", renewal_line(entry))?;
    }
    Ok(())
}

fn run_classify<W: Write>(args: &ArgMatches, out: &mut W) -> Result<()> {
    let date = args
        .get_one::<String>("date")
        .context("missing renewal date")?;
    let status = roster_core::classify_renewal(date, today(args)?)?;
    writeln!(out, "{status}")?;
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryReport {
    as_of: NaiveDate,
    roster: RosterSummary,
    renewals: RenewalSummary,
    tiers: TierBreakdown,
}

fn run_summary<W: Write>(args: &ArgMatches, out: &mut W) -> Result<()> {
    let today = today(args)?;
    let members = member_batch(args)?;
    let annotated = roster_core::with_renewal_status(members, today);
    let report = SummaryReport {
        as_of: today,
        roster: RosterSummary::from_members(annotated.iter().map(|m| &m.member)),
        renewals: RenewalSummary::from_members(&annotated),
        tiers: TierBreakdown::from_members(annotated.iter().map(|m| &m.member)),
    };

    if args.get_flag("json") {
        return write_json(out, &report);
    }

    let r = &report.roster;
    writeln!(out, "Roster as of {}", report.as_of)?;
    writeln!(out, "==========================")?;
    writeln!(out, "Members:        {}", r.total)?;
    writeln!(out, "  Active:       {}", r.active)?;
    writeln!(out, "  Pending:      {}", r.pending)?;
    writeln!(out, "  Inactive:     {}", r.inactive)?;
    writeln!(out, "  Churned:      {}", r.churned)?;
    writeln!(out, "Active revenue: ${}", r.active_revenue)?;
    writeln!(out)?;
    let n = &report.renewals;
    writeln!(out, "Renewals")?;
    for status in RenewalStatus::ALL {
        writeln!(out, "  {:<10} {}", status.as_str(), n.count(status))?;
    }
    writeln!(out, "Estimated renewal revenue: ${}", n.estimated_revenue)?;
    writeln!(out)?;
    writeln!(out, "Tiers")?;
    for line in &report.tiers.lines {
        writeln!(out, "  {:<17} {:>5}  ${}", line.tier.as_str(), line.members, line.revenue)?;
    }
    Ok(())
}
