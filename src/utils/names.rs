/// Names offered by the "Surprise Me" button.
pub const RANDOM_NAMES: [&str; 20] = [
    "Banana Bob", "Pizza Pete", "Disco Danny", "Muffin Mike", "Taco Tom",
    "Waffle Wayne", "Pickle Paul", "Donut Dave", "Cookie Carl", "Pretzel Pat",
    "Noodle Nick", "Bagel Bill", "Cupcake Chris", "Pancake Phil", "Burrito Ben",
    "Sushi Sam", "Cheese Charlie", "Bacon Barry", "Sandwich Steve", "Yogurt Yuki",
];

pub fn random_names() -> Vec<String> {
    RANDOM_NAMES.iter().map(|n| n.to_string()).collect()
}
