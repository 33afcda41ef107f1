use anyhow::Result;
use smallest_linear_algebra::operations::{
    addition, angle, cross_product, cross_product_with, dot_product, row_angle, row_dot_product,
    scalar_multiplication,
};
use smallest_linear_algebra::{ColumnVector, CrossProductConvention, OpsConfig, RowVector};

fn main() -> Result<()> {
    env_logger::init();

    let a: RowVector = "[1, 2, 3]".parse()?;
    let b = RowVector::new(vec![4, 5, 6])?;
    println!("a = {}, |a| = {:.4}", a, a.norm());
    println!("a . b = {}", row_dot_product(&a, &b)?);
    println!("angle(a, b) = {:.4} deg", row_angle(&a, &b)?);

    let x = ColumnVector::new([[1.0], [0.0], [0.0]])?;
    let y = ColumnVector::new([[0.0], [1.0], [0.0]])?;
    println!("x + y = {}", addition(&x, &y)?);
    println!("3 * y = {}", scalar_multiplication(3.0, &y));
    println!("x . y = {}", dot_product(&x, &y)?);
    println!("angle(x, y) = {} deg", angle(&x, &y)?);
    println!("x cross y = {}", cross_product(&x, &y)?);

    let u = a.transpose();
    let v = b.transpose();
    let legacy = OpsConfig::new(CrossProductConvention::Legacy, 0.0);
    println!("u cross v (standard) = {}", cross_product(&u, &v)?);
    println!("u cross v (legacy)   = {}", cross_product_with(&u, &v, &legacy)?);

    // Errors come back as values; nothing here aborts.
    match ColumnVector::new(vec![vec![1.0], vec![2.0, 3.0]]) {
        Ok(c) => println!("unexpected column {}", c),
        Err(e) => println!("rejected: {}", e),
    }
    if let Err(e) = dot_product(&x, &ColumnVector::zeros(2)) {
        println!("rejected: {}", e);
    }

    Ok(())
}
