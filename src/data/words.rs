//! Word lists for the sample data generator.

pub const ADJECTIVES: &[&str] = &[
    "Awesome",
    "Bespoke",
    "Elegant",
    "Ergonomic",
    "Fantastic",
    "Generic",
    "Gorgeous",
    "Handcrafted",
    "Handmade",
    "Incredible",
    "Intelligent",
    "Licensed",
    "Luxurious",
    "Modern",
    "Oriental",
    "Practical",
    "Recycled",
    "Refined",
    "Rustic",
    "Sleek",
    "Small",
    "Tasty",
    "Unbranded",
];

pub const MATERIALS: &[&str] = &[
    "Bamboo", "Bronze", "Ceramic", "Concrete", "Cotton", "Fresh", "Frozen", "Granite", "Marble",
    "Metal", "Plastic", "Rubber", "Soft", "Steel", "Wooden",
];

pub const PRODUCTS: &[&str] = &[
    "Bacon", "Ball", "Bike", "Car", "Chair", "Cheese", "Chicken", "Chips", "Computer", "Fish",
    "Gloves", "Hat", "Keyboard", "Mouse", "Pants", "Pizza", "Salad", "Sausages", "Shirt",
    "Shoes", "Soap", "Table", "Towels", "Tuna",
];

pub const LOREM: &[&str] = &[
    "a", "ab", "accusamus", "ad", "adipisci", "alias", "aliquam", "amet", "animi", "aperiam",
    "architecto", "asperiores", "aut", "autem", "beatae", "blanditiis", "commodi", "consectetur",
    "consequatur", "corporis", "culpa", "cumque", "cupiditate", "debitis", "delectus",
    "deleniti", "deserunt", "dicta", "dignissimos", "distinctio", "dolor", "dolore", "dolorem",
    "doloremque", "dolores", "doloribus", "dolorum", "ducimus", "ea", "eaque", "earum", "eius",
    "eligendi", "enim", "eos", "error", "esse", "est", "et", "eum", "eveniet", "ex", "excepturi",
    "exercitationem", "expedita", "explicabo", "facere", "facilis", "fuga", "fugiat", "fugit",
    "harum", "hic", "id", "illo", "illum", "impedit", "in", "incidunt", "inventore", "ipsa",
    "ipsam", "ipsum", "iste", "itaque", "iure", "iusto", "labore", "laboriosam", "laborum",
    "laudantium", "libero", "magnam", "magni", "maiores", "maxime", "minima", "minus",
    "modi", "molestiae", "mollitia", "nam", "natus", "necessitatibus", "nemo", "neque",
    "nesciunt", "nihil", "nisi", "nobis", "non", "nostrum", "nulla", "numquam", "obcaecati",
    "odio", "odit", "officia", "officiis", "omnis", "optio", "pariatur", "perferendis",
    "perspiciatis", "placeat", "porro", "possimus", "praesentium", "provident", "quae",
    "quaerat", "quam", "quas", "quasi", "qui", "quia", "quibusdam", "quidem", "quis", "quisquam",
    "quo", "quod", "quos", "ratione", "recusandae", "reiciendis", "rem", "repellat",
    "repellendus", "reprehenderit", "repudiandae", "rerum", "saepe", "sapiente", "sed",
    "sequi", "similique", "sint", "sit", "soluta", "sunt", "suscipit", "tempora", "tempore",
    "temporibus", "tenetur", "totam", "ullam", "unde", "ut", "vel", "velit", "veniam",
    "veritatis", "vero", "vitae", "voluptas", "voluptate", "voluptatem", "voluptates",
    "voluptatibus", "voluptatum",
];
