//! Builds a tree from the command line and prints its traversals, counts and
//! search results before and after deleting values.

use std::fmt::Display;
use std::io::{self, Write};

use anyhow::Result;
use bst::tree::Tree;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bst-demo")]
#[command(version, about = "Exercise an unbalanced binary search tree", long_about = None)]
struct Cli {
    /// Values to insert, in order
    #[arg(default_values_t = [6, 8, 4, 2, 5, 7, 12, 1])]
    values: Vec<i64>,

    /// Value to delete after the first report (repeatable)
    #[arg(short, long = "delete", default_values_t = [6, 5])]
    deletes: Vec<i64>,

    /// Value to search for (repeatable)
    #[arg(short, long = "search", default_values_t = [12, 34])]
    searches: Vec<i64>,

    /// Build the tree with the recursive insertion instead of the iterative one
    #[arg(long)]
    recursive: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bst=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut tree = Tree::new();
    for value in cli.values {
        if cli.recursive {
            tree.insert_recursive(value);
        } else {
            tree.insert(value);
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    print_traversals(&mut out, &tree)?;
    writeln!(out, "There are {} nodes in the binary tree.", tree.len())?;
    writeln!(out, "There are {} leaves in the binary tree.", tree.leaf_count())?;
    writeln!(out, "The binary tree has height {}.", tree.height())?;
    for value in &cli.searches {
        writeln!(out, "{} is in the binary tree: {}", value, tree.search(value))?;
    }

    for value in &cli.deletes {
        writeln!(out)?;
        match tree.delete(value) {
            Some(_) => writeln!(out, "After deleting {}", value)?,
            None => writeln!(out, "{} is not in the binary tree", value)?,
        }
        print_traversals(&mut out, &tree)?;
    }

    Ok(())
}

fn print_traversals<T: Display>(out: &mut impl Write, tree: &Tree<T>) -> io::Result<()> {
    print_walk(out, "Preorder Traversal", tree.pre_order())?;
    print_walk(out, "Postorder Traversal", tree.post_order())?;
    print_walk(out, "Inorder Traversal", tree.in_order())?;

    writeln!(out, "Level Order Traversal")?;
    let mut current_depth = None;
    for (depth, value) in tree.level_order().with_depth() {
        if current_depth != Some(depth) {
            if current_depth.is_some() {
                writeln!(out)?;
            }
            write!(out, "  level {}:", depth)?;
            current_depth = Some(depth);
        }
        write!(out, " {}", value)?;
    }
    writeln!(out)
}

fn print_walk<'a, T: Display + 'a>(
    out: &mut impl Write,
    title: &str,
    walk: impl Iterator<Item = &'a T>,
) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    write!(out, " ")?;
    for value in walk {
        write!(out, " {}", value)?;
    }
    writeln!(out)
}
