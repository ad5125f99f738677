use std::fs::File;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use densemat::{add, multiply, render, sum_diagonals, MatrixError, MatrixPair};

fn main() -> ExitCode {
    env_logger::init();

    print!("Enter the input filename: ");
    if let Err(e) = io::stdout().flush() {
        log::error!("failed to write prompt: {e}");
        return ExitCode::FAILURE;
    }

    let mut filename = String::new();
    if let Err(e) = io::stdin().lock().read_line(&mut filename) {
        log::error!("failed to read filename from stdin: {e}");
        return ExitCode::FAILURE;
    }
    let filename = filename.trim();

    let file = match File::open(filename) {
        Ok(file) => file,
        Err(e) => {
            log::error!("could not open {filename}: {e}");
            return ExitCode::FAILURE;
        }
    };
    let pair = match densemat::load(file) {
        Ok(pair) => pair,
        Err(e) => {
            log::error!("error loading matrices from {filename}: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("\nMatrices loaded");
    match run(&pair) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("runtime error: {e}");
            ExitCode::FAILURE
        }
    }
}

// Addition and multiplication failures abort the run; every
// other operation reports its error and the pipeline continues.
fn run(pair: &MatrixPair) -> Result<(), MatrixError> {
    let (a, b) = (pair.a(), pair.b());
    print!("{}", render(a, "Matrix A:"));
    print!("{}", render(b, "Matrix B:"));

    println!("Matrix Addition");
    let sum = add(a, b)?;
    print!("{}", render(&sum, "Result (A + B):"));

    println!("Matrix Multiplication");
    let product = multiply(a, b)?;
    print!("{}", render(&product, "Result (A * B):"));

    println!("Diagonal Sums (Matrix A)");
    match sum_diagonals(a) {
        Ok(sums) => {
            println!("Sum of main diagonal elements: {}", sums.main);
            println!("Sum of secondary diagonal elements: {}", sums.secondary);
        }
        Err(e) => log::error!("{e}"),
    }

    println!("\nSwapping Rows 0 and 1 of Matrix A");
    let mut row_swapped = a.clone();
    if let Err(e) = row_swapped.swap_rows(0, 1) {
        log::error!("{e}");
    }
    print!("{}", render(&row_swapped, "Matrix A after row swap:"));

    println!("Swapping Columns 1 and 2 of Matrix B");
    let mut col_swapped = b.clone();
    if let Err(e) = col_swapped.swap_cols(1, 2) {
        log::error!("{e}");
    }
    print!("{}", render(&col_swapped, "Matrix B after column swap:"));

    println!("Updating Element (2, 2) in Matrix A to 99");
    let mut updated = a.clone();
    if let Err(e) = updated.set(2, 2, 99) {
        log::error!("{e}");
    }
    print!("{}", render(&updated, "Matrix A after update:"));

    Ok(())
}
