#![warn(clippy::unwrap_used, clippy::pedantic)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::doc_markdown
)]
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{self, OptionExt};
use orrery::{
    bodies::{OrbitalBody, SolarSystem},
    photometry::phase_integral,
    units,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Inspect orbital-body catalogs.
#[derive(Parser)]
struct Args {
    /// RON catalog of body records.
    #[arg(default_value = "data/solar_system.ron")]
    catalog: PathBuf,
    /// Print every field of one body instead of the summary table.
    #[arg(long)]
    body: Option<String>,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let system = SolarSystem::load(&args.catalog)?;
    info!(
        "loaded {} bodies from {}",
        system.bodies.len(),
        args.catalog.display()
    );

    match args.body {
        Some(name) => {
            let body = system
                .get(&name)
                .ok_or_eyre(format!("no body named {name:?} in the catalog"))?;
            print_detail(body);
        }
        None => print_summary(&system),
    }
    Ok(())
}

fn print_summary(system: &SolarSystem) {
    println!(
        "{:<12} {:<20} {:>10} {:>9} {:>12} {:>11} {:>11}",
        "name", "class", "a (AU)", "e", "period (yr)", "peri (AU)", "apo (AU)"
    );
    for body in system.bodies_by_orbit() {
        println!(
            "{:<12} {:<20} {:>10.4} {:>9.5} {:>12.3} {:>11.4} {:>11.4}",
            body.name,
            body.class.label(),
            body.a,
            body.e,
            body.period_centuries() * 100.0,
            body.periapsis_distance(),
            body.apoapsis_distance()
        );
    }
}

fn print_detail(body: &OrbitalBody) {
    let axis = body.spin_axis();
    println!(
        "{} ({}, class code {})",
        body.name,
        body.class.label(),
        u8::from(body.class)
    );
    println!("  epoch                {}", body.epoch);
    println!("  semi-major axis      {:.6} AU", body.a);
    println!("  eccentricity         {:.6}", body.e);
    println!("  inclination          {:.6} rad", body.i);
    println!("  arg of periapsis     {:.6} rad", body.argpe);
    println!("  long ascending node  {:.6} rad", body.lan);
    println!("  rotation rate        {:.1} rad/century", body.theta_dot);
    println!(
        "  spin axis            [{:.4}, {:.4}, {:.4}]",
        axis.x, axis.y, axis.z
    );
    println!("  absolute magnitude   {:.2}", body.absolute_mag);
    println!("  radius               {:.3} km", body.radius);
    println!("  mass                 {:.4e} kg", body.mass);
    println!("  ring radius          {:.3} radii", body.ring_radius);
    println!("  zoom ratio           {:.0}", body.zoom_ratio);
    println!(
        "  orbital period       {:.4} yr",
        body.period_centuries() * 100.0
    );
    println!("  mean orbit radius    {:.6} AU", body.mean_orbit_radius());
    println!("  periapsis            {:.6} AU", body.periapsis_distance());
    println!("  apoapsis             {:.6} AU", body.apoapsis_distance());
    println!("  render radius        {:.6} scene units", body.exag_radius());
    println!();
    println!("  phase angle (deg)  phase integral");
    for deg in (0..=180).step_by(30) {
        let alpha = f64::from(deg) * units::TO_RAD;
        println!("  {deg:>17} {:>15.6}", phase_integral(alpha));
    }
}
