#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use compas::{
    measure_search, measure_sort, DataGenerator, ReportSet, Result, SearchAlgorithm, SortAlgorithm,
};

#[derive(Parser, Debug)]
#[command(
    name = "compare-bench",
    about = "Times instrumented sort/search algorithms across dataset sizes"
)]
struct Args {
    /// Algorithms to run; defaults to the full suite.
    #[arg(long = "algo", value_enum)]
    algos: Vec<AlgoArg>,

    /// Dataset sizes, comma separated.
    #[arg(long, value_delimiter = ',', default_values_t = [1_000usize, 5_000, 10_000, 50_000, 100_000])]
    sizes: Vec<usize>,

    /// Optional RNG seed for reproducible datasets and search keys.
    #[arg(long)]
    seed: Option<u64>,

    /// Export the results table as CSV.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Export the results table as JSON.
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
enum AlgoArg {
    LinearSearch,
    BinarySearch,
    QuickSort,
    MergeSort,
    HeapSort,
    BubbleSort,
    InsertionSort,
    SelectionSort,
    ShellSort,
}

impl AlgoArg {
    fn all() -> Vec<Self> {
        vec![
            AlgoArg::LinearSearch,
            AlgoArg::BinarySearch,
            AlgoArg::QuickSort,
            AlgoArg::MergeSort,
            AlgoArg::HeapSort,
            AlgoArg::BubbleSort,
            AlgoArg::InsertionSort,
            AlgoArg::SelectionSort,
            AlgoArg::ShellSort,
        ]
    }

    fn dispatch(self) -> Dispatch {
        match self {
            AlgoArg::LinearSearch => Dispatch::Search(SearchAlgorithm::Linear),
            AlgoArg::BinarySearch => Dispatch::Search(SearchAlgorithm::Binary),
            AlgoArg::QuickSort => Dispatch::Sort(SortAlgorithm::Quick),
            AlgoArg::MergeSort => Dispatch::Sort(SortAlgorithm::Merge),
            AlgoArg::HeapSort => Dispatch::Sort(SortAlgorithm::Heap),
            AlgoArg::BubbleSort => Dispatch::Sort(SortAlgorithm::Bubble),
            AlgoArg::InsertionSort => Dispatch::Sort(SortAlgorithm::Insertion),
            AlgoArg::SelectionSort => Dispatch::Sort(SortAlgorithm::Selection),
            AlgoArg::ShellSort => Dispatch::Sort(SortAlgorithm::Shell),
        }
    }
}

enum Dispatch {
    Sort(SortAlgorithm),
    Search(SearchAlgorithm),
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let args = Args::parse();
    let algos = if args.algos.is_empty() {
        AlgoArg::all()
    } else {
        args.algos.clone()
    };

    let rng: Box<dyn RngCore> = match args.seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };
    let mut generator = DataGenerator::with_rng(rng);
    let mut report = ReportSet::new();

    for &size in &args.sizes {
        let baseline = generator.generate(size);
        let key = generator.pick_key(&baseline);

        for &algo in &algos {
            match algo.dispatch() {
                Dispatch::Sort(sort) => {
                    // Each sort gets a private copy of the same unsorted baseline.
                    report.push(measure_sort(&baseline, sort));
                }
                Dispatch::Search(search) => {
                    let Some(key) = key else { continue };
                    match search {
                        SearchAlgorithm::Linear => {
                            report.push(measure_search(&baseline, key, search)?);
                        }
                        SearchAlgorithm::Binary => {
                            // The sorted-input precondition is established here.
                            let mut sorted = baseline.clone();
                            sorted.sort_unstable();
                            report.push(measure_search(&sorted, key, search)?);
                        }
                    }
                }
            }
        }
    }

    report.print_summary();
    if let Some(path) = &args.csv {
        report.export_csv(path)?;
    }
    if let Some(path) = &args.json {
        report.export_json(path)?;
    }
    Ok(())
}
