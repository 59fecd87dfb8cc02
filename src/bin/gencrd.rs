use kube::CustomResourceExt;
use operator::crd::{
    ClusterManager, IndexerCluster, LicenseManager, MonitoringConsole, SearchHeadCluster,
    Standalone,
};

use clap::Parser;
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    // Output directory
    #[arg(short, long, default_value = ".")]
    output: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    // Create directory if it does not exist
    std::fs::create_dir_all(&args.output)?;
    let crds = [
        ("standalone", Standalone::crd()),
        ("licensemanager", LicenseManager::crd()),
        ("indexercluster", IndexerCluster::crd()),
        ("clustermanager", ClusterManager::crd()),
        ("monitoringconsole", MonitoringConsole::crd()),
        ("searchheadcluster", SearchHeadCluster::crd()),
    ];
    for (file, crd) in crds {
        std::fs::write(
            format!("{}/{file}.yaml", args.output),
            serde_yaml::to_string(&crd)?,
        )?;
    }
    Ok(())
}
