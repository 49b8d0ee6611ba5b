use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};
    use impact_dmath::vector::Double3;

    #[derive(Debug, Parser)]
    #[command(about = "The Impact double-precision math library", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Evaluate common quantities for a vector
        Describe {
            /// Components of the vector
            #[arg(num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
            components: Vec<f64>,
        },
        #[cfg(feature = "benchmark")]
        /// Run a benchmarking target
        Benchmark {
            /// Benchmarking target to run
            #[arg(short, long, value_enum)]
            target: impact_dmath::benchmark::Target,

            /// Number of seconds to run the target for (it will always be run at least
            /// once)
            #[arg(short, long, default_value_t = 0.0)]
            duration: f64,

            /// Minimum number of seconds from the program is started until the target
            /// is run
            #[arg(long, default_value_t = 0.0)]
            delay: f64,
        },
        #[cfg(not(feature = "benchmark"))]
        /// Run a benchmarking target (requires the `benchmark` feature)
        Benchmark,
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Describe { components } => {
                let [x, y, z] = components[..] else {
                    anyhow::bail!("Expected three components, got {}", components.len());
                };
                describe(Double3::new(x, y, z));
                Ok(())
            }
            #[cfg(feature = "benchmark")]
            Command::Benchmark {
                target,
                duration,
                delay,
            } => {
                impact_dmath::benchmark::benchmark(target, duration, delay);
                Ok(())
            }
            #[cfg(not(feature = "benchmark"))]
            Command::Benchmark => {
                anyhow::bail!(
                    "The `benchmark` subcommand requires the `benchmark` feature to be enabled."
                )
            }
        }
    }

    fn describe(vector: Double3) {
        log::debug!("Describing {vector:?}");
        println!("Vector:     {vector}");
        println!("Norm:       {}", vector.norm());
        println!("Normalized: {}", vector.normalized());
        println!("Sum:        {}", vector.component_sum());
        println!("Average:    {}", vector.component_average());
        println!(
            "Min/max:    {} / {}",
            vector.min_component(),
            vector.max_component()
        );
        if vector.is_zero() {
            log::warn!("Vector is zero, normalization leaves it unchanged");
        }
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
