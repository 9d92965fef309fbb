mod console;

use mathcustom::{vector, Complex, Result, Vector};

fn complex_demo() -> Result<()> {
	let i = Complex::I;
	println!("(1 + i)^2 = {}", (1.0f64 + i).powi(2)?);
	println!("|i| = {}", i.abs());

	let mut z = 1.0f64 + i;
	z = (z / (1.0f64 + i))?;
	println!("(1 + i) / (1 + i) = {}", z);

	println!("(1 - 3i) / (1 + 2i) = {}", ((1.0f64 - 3.0f64 * i) / (1.0f64 + 2.0f64 * i))?);

	let (r, theta) = Complex::new(3.0, 4.0).trig();
	println!("trig(3 + 4i) = ({}, {})", r, theta);

	Ok(())
}

fn vector_demo() -> Result<()> {
	let v1 = vector![1, 2, 3, 4, 5, 6]?;
	let v2 = vector![1, 2, 3, 4, 5, 6]?;
	let v3 = vector![5, 6, 9]?;
	let v4 = vector![1, 3, 4]?;
	let v5 = Vector::try_from(vec![1.0, 2.0, 3.0])?;

	println!("{}", v5);
	println!("1 + {} = {}", v2, 1i32 + &v2);
	println!("{} . {} = {}", v4, v3, (&v4 * &v3)?);
	println!("{} - 1 = {}", v2, &v2 - 1i32);
	println!("1 - {} = {}", v2, 1i32 - &v2);
	println!("{} * 2 = {}", v1, &v1 * 2i32);
	println!("{} . {} = {}", v1, v2, (&v1 * &v2)?);
	println!("|{}| = {}", v3, v3.norm());
	println!("{} != {} is {}", v1, v2, v1 != v2);

	let zero = vector![0, 0, 0]?;
	if let Err(err) = v3.cdiv(&zero) {
		log::warn!(target: "demo", "{} / {} failed: {}", v3, zero, err);
	}

	Ok(())
}

fn main() {
	if let Err(err) = log::set_logger(&console::Log {}).map(|()| log::set_max_level(log::LevelFilter::Debug)) {
		eprintln!("failed to install logger: {}", err);
	}

	if let Err(err) = complex_demo().and_then(|()| vector_demo()) {
		log::error!(target: "demo", "{}", err);
		std::process::exit(1);
	}
}
