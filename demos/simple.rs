use quadtable::table::QuadTable;

fn main() {
    let mut table = QuadTable::<i32>::with_exponent(3);

    table.insert(42).unwrap();
    table.insert(17).unwrap();

    assert!(table.contains(42));

    table.remove(17);

    println!("bins: {}", table);
    println!("live: {}, load factor: {}", table.len(), table.load_factor());
}
