use math::{
    ops,
    vec::{Vector2, Vector3},
};

fn main() {
    let v1 = Vector3::new(1.0, 2.0, 3.0);
    let v2 = Vector3::new(5.0, 6.0, 7.0);
    let v3 = Vector3::new(3.0, 1.0, 2.0);
    let v4 = Vector2::new(7.0, 3.0);
    let v5 = Vector2::new(6.0, -4.0);

    println!("{}", ops::sum(&v1, &v2));
    println!("{}", ops::projection(&v4, &v5));

    println!("cross {} - area {:.6} - angle {:.6}",
        ops::cross_product(&v1, &v3),
        ops::vector_area(&v1, &v3),
        ops::angle(&v1, &v3));
    println!("component {:.6} - orthogonal {}",
        ops::vector_component(&v4, &v5),
        ops::orthogonal_vector(&v4));
}
