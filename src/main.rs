//! Salon CLI
//!
//! Command-line front end for the salon booking API:
//! - List services and staff
//! - Look up available time slots
//! - Book an appointment through the four-step wizard
//! - Show (and watch) the dashboard panels

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use salon_booking::api::{DashboardApi, HttpClient};
use salon_booking::booking::{BookingSession, BookingWizard, Step};
use salon_booking::catalog::{ContactFields, Service, StaffMember, TimeSlot};
use salon_booking::config::{generate_default_config, Config};
use salon_booking::dashboard::{DashboardData, DashboardFilter, SeriesData};
use salon_booking::notice::{NoticeBoard, NoticeKind};

#[derive(Parser)]
#[command(name = "salon")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Book salon appointments and check the dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL, overrides the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List bookable services
    Services,

    /// List staff members
    Staff,

    /// Show time slots for a service, staff member and date
    Slots {
        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,
        /// Service id
        #[arg(short, long)]
        service: String,
        /// Staff member id
        #[arg(long)]
        staff: String,
    },

    /// Book an appointment
    Book {
        /// Service id
        #[arg(short, long)]
        service: String,
        /// Staff member id
        #[arg(long)]
        staff: String,
        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,
        /// Time slot, as listed by `salon slots`
        #[arg(short, long)]
        time: String,
        /// Extra form fields in key=value format (name, email, notes...)
        #[arg(short = 'F', long = "field")]
        fields: Vec<String>,
    },

    /// Show the dashboard
    Dashboard {
        /// Filter staff and feedback by text
        #[arg(short, long)]
        search: Option<String>,
        /// Only show feedback with at least this rating
        #[arg(long)]
        min_rating: Option<u8>,
        /// Keep running and refresh on the configured interval
        #[arg(short, long)]
        watch: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_ref());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    salon_booking::logging::init(&config.logging)?;
    tracing::debug!(api = %config.api.base_url, "Salon CLI v{}", env!("CARGO_PKG_VERSION"));

    let client = HttpClient::new(config.api.client_config())?;
    let wizard = BookingWizard::with_policy(config.booking.date_policy()?);

    match cli.command {
        Commands::Services => {
            let mut session = BookingSession::with_wizard(client, wizard);
            session.load_catalog().await;
            fail_on_error(session.notices_mut())?;
            print_services(session.services(), cli.format)?;
        }

        Commands::Staff => {
            let mut session = BookingSession::with_wizard(client, wizard);
            session.load_catalog().await;
            fail_on_error(session.notices_mut())?;
            print_staff(session.staff(), cli.format)?;
        }

        Commands::Slots {
            date,
            service,
            staff,
        } => {
            let mut session = BookingSession::with_wizard(client, wizard);
            session.select_service(service).await;
            session.select_staff(staff).await;
            session.select_date(date).await;
            fail_on_error(session.notices_mut())?;
            print_slots(session.wizard().slots(), cli.format)?;
        }

        Commands::Book {
            service,
            staff,
            date,
            time,
            fields,
        } => {
            let contact = parse_fields(&fields)?;
            let mut session = BookingSession::with_wizard(client, wizard);

            session.select_service(service).await;
            advance(&mut session, Step::Staff)?;

            session.select_staff(staff).await;
            advance(&mut session, Step::DateTime)?;

            session.select_date(date).await;
            fail_on_error(session.notices_mut())?;
            session.select_time(&time);
            advance(&mut session, Step::Confirm)?;

            let confirmation = session.submit(contact).await;
            fail_on_error(session.notices_mut())?;

            match confirmation {
                Some(confirmation) => match cli.format {
                    Format::Json => println!(
                        "{}",
                        serde_json::to_string_pretty(&serde_json::json!({
                            "bookingId": confirmation.booking_id,
                            "confirmation": confirmation.path(),
                        }))?
                    ),
                    Format::Table => {
                        println!("Booking ID:   {}", confirmation.booking_id);
                        println!("Confirmation: {}", confirmation.path());
                    }
                },
                None => bail!("booking was not confirmed"),
            }
        }

        Commands::Dashboard {
            search,
            min_rating,
            watch,
        } => {
            let mut filter = DashboardFilter::new();
            if let Some(term) = &search {
                filter.set_search(term);
            }
            if let Some(rating) = min_rating {
                filter = filter.min_rating(rating);
            }

            let mut data = DashboardData::new();

            if !watch {
                let report = data.refresh(&client).await;
                if let Some((NoticeKind::Error, message)) = report.notice(true) {
                    bail!(message);
                }
                return print_dashboard(&data, &filter, cli.format);
            }

            let period = Duration::from_secs(config.dashboard.refresh_interval_secs.max(1));
            let stop = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::error!(error = %e, "Failed to listen for Ctrl-C");
                    std::future::pending::<()>().await;
                }
            };
            watch_dashboard(&client, &mut data, &filter, cli.format, period, stop).await?;
        }

        Commands::Config { .. } => unreachable!("handled before config loading"),
    }

    Ok(())
}

/// Refresh and print the dashboard on every tick until `stop` resolves.
///
/// `stop` is polled across iterations, so it also fires while a refresh is running.
async fn watch_dashboard<A: DashboardApi + ?Sized>(
    api: &A,
    data: &mut DashboardData,
    filter: &DashboardFilter,
    format: Format,
    period: Duration,
    stop: impl Future<Output = ()>,
) -> anyhow::Result<()> {
    let mut ticker = tokio::time::interval(period);
    let mut manual = true;
    tokio::pin!(stop);

    loop {
        tokio::select! {
            _ = &mut stop => {
                tracing::info!("Stopping dashboard watch");
                return Ok(());
            }
            _ = ticker.tick() => {
                let report = data.refresh(api).await;
                if let Some((kind, message)) = report.notice(manual) {
                    print_notice(kind, message);
                }
                manual = false;
                print_dashboard(data, filter, format)?;
            }
        }
    }
}

fn write_default_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("writing config to {}", path.display()))?;
            println!("Config written to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

/// Parse `key=value` form fields
fn parse_fields(fields: &[String]) -> anyhow::Result<ContactFields> {
    let mut contact = ContactFields::new();
    for field in fields {
        let Some((key, value)) = field.split_once('=') else {
            bail!("invalid field {:?}, expected key=value", field);
        };
        let key = key.trim();
        if key.is_empty() {
            bail!("invalid field {:?}, empty key", field);
        }
        contact.insert(key.to_string(), value.to_string());
    }
    Ok(contact)
}

/// Move to the next step and make sure the wizard actually got there
fn advance(session: &mut BookingSession<HttpClient>, expected: Step) -> anyhow::Result<()> {
    let step = session.next_step();
    fail_on_error(session.notices_mut())?;
    if step != expected {
        bail!("expected to reach {}, still on {}", expected.title(), step.title());
    }
    tracing::debug!(step = %step, "Advanced");
    Ok(())
}

/// Print pending notices; the last error becomes the command's failure
fn fail_on_error(board: &mut NoticeBoard) -> anyhow::Result<()> {
    let mut failure = None;
    for notice in board.drain() {
        print_notice(notice.kind, &notice.message);
        if notice.is_error() {
            failure = Some(notice.message);
        }
    }
    match failure {
        Some(message) => bail!(message),
        None => Ok(()),
    }
}

fn print_notice(kind: NoticeKind, message: &str) {
    match kind {
        NoticeKind::Success => println!("✓ {}", message),
        NoticeKind::Error => eprintln!("✗ {}", message),
    }
}

fn print_services(services: &[Service], format: Format) -> anyhow::Result<()> {
    if format == Format::Json {
        println!("{}", serde_json::to_string_pretty(services)?);
        return Ok(());
    }

    if services.is_empty() {
        println!("No services available.");
        return Ok(());
    }

    println!("{:<12} {:<28} {:>8} {:>8}", "ID", "Service", "Minutes", "Price");
    println!("{}", "-".repeat(60));
    for service in services {
        println!(
            "{:<12} {:<28} {:>8} {:>8}",
            service.id,
            service.name,
            service.duration,
            service.price_label()
        );
    }
    Ok(())
}

fn print_staff(staff: &[StaffMember], format: Format) -> anyhow::Result<()> {
    if format == Format::Json {
        println!("{}", serde_json::to_string_pretty(staff)?);
        return Ok(());
    }

    if staff.is_empty() {
        println!("No staff members found.");
        return Ok(());
    }

    println!("{:<12} {:<24} {:<20} {}", "ID", "Name", "Role", "Rating");
    println!("{}", "-".repeat(66));
    for member in staff {
        println!(
            "{:<12} {:<24} {:<20} {}",
            member.id,
            member.name,
            member.role,
            member.stars()
        );
    }
    Ok(())
}

fn print_slots(slots: &[TimeSlot], format: Format) -> anyhow::Result<()> {
    if format == Format::Json {
        println!("{}", serde_json::to_string_pretty(slots)?);
        return Ok(());
    }

    if slots.is_empty() {
        println!("No time slots for this date.");
        return Ok(());
    }

    for slot in slots {
        let status = if slot.available { "available" } else { "booked" };
        println!("  {:<8} {}", slot.time, status);
    }
    Ok(())
}

fn print_dashboard(
    data: &DashboardData,
    filter: &DashboardFilter,
    format: Format,
) -> anyhow::Result<()> {
    let staff = filter.staff(&data.staff_performance);
    let feedback = filter.feedback(&data.customer_feedback);

    if format == Format::Json {
        let body = serde_json::json!({
            "revenue": data.revenue,
            "appointments": data.appointments,
            "staffPerformance": staff,
            "customerFeedback": feedback,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    print_series("Revenue", data.revenue.as_ref());
    print_series("Appointments", data.appointments.as_ref());

    println!();
    println!("Staff performance:");
    if staff.is_empty() {
        println!("  (none)");
    }
    for member in staff {
        let bar = "█".repeat((member.bar_width() / 5.0).round() as usize);
        println!(
            "  {:<22} {:<18} {:>5.1}% {}",
            member.name, member.role, member.performance, bar
        );
    }

    println!();
    match data.average_rating() {
        Some(avg) => println!("Customer feedback (average {:.1}):", avg),
        None => println!("Customer feedback:"),
    }
    if feedback.is_empty() {
        println!("  (none)");
    }
    for entry in feedback {
        println!("  {} {} - {}", entry.stars(), entry.date, entry.customer);
        println!("    {}", entry.comment);
    }
    Ok(())
}

fn print_series(title: &str, series: Option<&SeriesData>) {
    println!();
    match series {
        Some(series) if !series.is_empty() => {
            println!("{} (total {:.2}):", title, series.total());
            for (label, value) in series.points() {
                println!("  {:<12} {:>10.2}", label, value);
            }
        }
        _ => println!("{}: no data", title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use salon_booking::api::ApiError;
    use salon_booking::dashboard::{CustomerFeedback, StaffPerformance};
    use std::cell::{Cell, RefCell};
    use tokio::sync::oneshot;

    /// Dashboard backend that raises the stop signal from inside a refresh
    struct StoppingDashboard {
        refreshes: Cell<usize>,
        stop: RefCell<Option<oneshot::Sender<()>>>,
    }

    #[async_trait(?Send)]
    impl DashboardApi for StoppingDashboard {
        async fn revenue(&self) -> Result<SeriesData, ApiError> {
            self.refreshes.set(self.refreshes.get() + 1);
            if let Some(stop) = self.stop.borrow_mut().take() {
                let _ = stop.send(());
            }
            Ok(SeriesData {
                labels: vec!["Mon".to_string()],
                values: vec![120.0],
            })
        }

        async fn appointments(&self) -> Result<SeriesData, ApiError> {
            Err(ApiError::Network("down".to_string()))
        }

        async fn staff_performance(&self) -> Result<Vec<StaffPerformance>, ApiError> {
            Ok(Vec::new())
        }

        async fn customer_feedback(&self) -> Result<Vec<CustomerFeedback>, ApiError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_watch_stops_when_signalled_during_refresh() {
        let (tx, rx) = oneshot::channel();
        let api = StoppingDashboard {
            refreshes: Cell::new(0),
            stop: RefCell::new(Some(tx)),
        };
        let stop = async {
            let _ = rx.await;
        };

        let mut data = DashboardData::new();
        watch_dashboard(
            &api,
            &mut data,
            &DashboardFilter::new(),
            Format::Json,
            Duration::from_secs(3600),
            stop,
        )
        .await
        .unwrap();

        assert_eq!(api.refreshes.get(), 1);
        assert_eq!(data.revenue.unwrap().values, vec![120.0]);
    }

    #[test]
    fn test_parse_fields() {
        let fields = vec!["name=Ana".to_string(), "notes=window seat=yes".to_string()];
        let contact = parse_fields(&fields).unwrap();
        assert_eq!(contact["name"], "Ana");
        assert_eq!(contact["notes"], "window seat=yes");
    }

    #[test]
    fn test_parse_fields_rejects_missing_value() {
        assert!(parse_fields(&["name".to_string()]).is_err());
        assert!(parse_fields(&["=x".to_string()]).is_err());
    }

    #[test]
    fn test_fail_on_error_drains() {
        let mut board = NoticeBoard::new();
        board.success("ok");
        board.error("Please select a service");

        let err = fail_on_error(&mut board).unwrap_err();
        assert_eq!(err.to_string(), "Please select a service");
        assert!(board.is_empty());
        assert!(fail_on_error(&mut board).is_ok());
    }

    #[test]
    fn test_cli_parses_book() {
        let cli = Cli::parse_from([
            "salon", "book", "--service", "svc-1", "--staff", "st-2", "--date", "2030-06-04",
            "--time", "11:00", "-F", "name=Ana",
        ]);
        match cli.command {
            Commands::Book { date, fields, .. } => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2030, 6, 4).unwrap());
                assert_eq!(fields, vec!["name=Ana".to_string()]);
            }
            _ => panic!("expected book command"),
        }
    }
}
