use crate::catalog::source::Catalog;
use crate::models::{
    AddOn, CategoryType, DeliverySlot, FoodItem, Ingredient, MacroProfile, TimeSlot,
};

fn ingredient(id: &str, name: &str, amount: &str) -> Ingredient {
    Ingredient {
        id: id.to_string(),
        name: name.to_string(),
        amount: amount.to_string(),
    }
}

fn add_on(id: &str, name: &str, price: f64) -> AddOn {
    AddOn {
        id: id.to_string(),
        name: name.to_string(),
        price,
    }
}

/// The built-in menu used when no catalog file is supplied.
pub fn sample_catalog() -> Catalog {
    let items = vec![
        FoodItem {
            id: "1".to_string(),
            name: "Pro-Gain Chicken Rice".to_string(),
            description: "Sous-vide chicken breast with broccoli and brown rice. The ultimate staple.".to_string(),
            price: 12.50,
            image: "https://picsum.photos/400/400?random=1".to_string(),
            macros: MacroProfile {
                calories: 618.0,
                protein: 69.0,
                carbs: 62.0,
                fat: 7.5,
            },
            category: CategoryType::MuscleGain,
            stock: 4,
            ingredients: vec![
                ingredient("i1", "Chicken Breast", "200g"),
                ingredient("i2", "Brown Rice", "200g"),
                ingredient("i3", "Broccoli", "80g"),
            ],
            tags: vec!["High Protein".to_string(), "Clean".to_string()],
            available_slots: vec![TimeSlot::Lunch, TimeSlot::Dinner],
        },
        FoodItem {
            id: "2".to_string(),
            name: "Lean Beef Pasta".to_string(),
            description: "Lean ground beef with whole wheat pasta and tomato basil sauce.".to_string(),
            price: 14.00,
            image: "https://picsum.photos/400/400?random=2".to_string(),
            macros: MacroProfile {
                calories: 700.0,
                protein: 50.0,
                carbs: 70.0,
                fat: 18.0,
            },
            category: CategoryType::MuscleGain,
            stock: 12,
            ingredients: vec![
                ingredient("i4", "Lean Beef", "150g"),
                ingredient("i5", "Wheat Pasta", "180g"),
            ],
            tags: vec!["Bulking".to_string()],
            available_slots: vec![TimeSlot::Lunch, TimeSlot::Dinner],
        },
        FoodItem {
            id: "3".to_string(),
            name: "Shredder Salad Bowl".to_string(),
            description: "Massive volume, low calorie. Tuna chunks with mixed greens and vinaigrette.".to_string(),
            price: 10.50,
            image: "https://picsum.photos/400/400?random=3".to_string(),
            macros: MacroProfile {
                calories: 280.0,
                protein: 25.0,
                carbs: 12.0,
                fat: 5.0,
            },
            category: CategoryType::FatLoss,
            stock: 8,
            ingredients: vec![
                ingredient("i6", "Tuna", "100g"),
                ingredient("i7", "Mixed Greens", "150g"),
            ],
            tags: vec!["Low Carb".to_string(), "Keto Friendly".to_string()],
            available_slots: vec![TimeSlot::Lunch, TimeSlot::Dinner],
        },
        FoodItem {
            id: "4".to_string(),
            name: "Whey Isolate Shake".to_string(),
            description: "Double scoop chocolate whey with water or skim milk option.".to_string(),
            price: 5.00,
            image: "https://picsum.photos/400/400?random=4".to_string(),
            macros: MacroProfile {
                calories: 240.0,
                protein: 50.0,
                carbs: 4.0,
                fat: 2.0,
            },
            category: CategoryType::Drinks,
            stock: 50,
            ingredients: vec![ingredient("i8", "Whey Protein", "2 scoops")],
            tags: vec!["Post-Workout".to_string()],
            available_slots: vec![TimeSlot::Lunch, TimeSlot::Dinner, TimeSlot::NextDayBreakfast],
        },
        FoodItem {
            id: "5".to_string(),
            name: "Guilt-Free Burger".to_string(),
            description: "A leaner take on the classic burger. 90% lean beef patty.".to_string(),
            price: 13.50,
            image: "https://picsum.photos/400/400?random=5".to_string(),
            macros: MacroProfile {
                calories: 650.0,
                protein: 45.0,
                carbs: 45.0,
                fat: 28.0,
            },
            category: CategoryType::CheatMeal,
            stock: 2,
            ingredients: vec![
                ingredient("i9", "Beef Patty", "150g"),
                ingredient("i10", "Brioche Bun", "1pc"),
            ],
            tags: vec!["Comfort Food".to_string()],
            available_slots: vec![TimeSlot::Dinner],
        },
        FoodItem {
            id: "6".to_string(),
            name: "Sunrise Egg Toast".to_string(),
            description: "Whole grain toast with 2 poached eggs and avocado spread.".to_string(),
            price: 8.50,
            image: "https://picsum.photos/400/400?random=6".to_string(),
            macros: MacroProfile {
                calories: 400.0,
                protein: 20.0,
                carbs: 35.0,
                fat: 18.0,
            },
            category: CategoryType::MuscleGain,
            stock: 20,
            ingredients: vec![
                ingredient("i11", "Eggs", "2 pcs"),
                ingredient("i12", "Whole Grain Toast", "2 slices"),
            ],
            tags: vec!["Breakfast".to_string()],
            available_slots: vec![TimeSlot::NextDayBreakfast],
        },
    ];

    let add_ons = vec![
        add_on("ao1", "Extra Protein Powder", 5.00),
        add_on("ao2", "Extra Hard-Boiled Egg", 2.00),
        add_on("ao3", "Extra Brown Rice", 2.00),
    ];

    let schedule = vec![
        DeliverySlot {
            id: TimeSlot::Lunch,
            label: "Lunch".to_string(),
            cutoff: "9:00 AM".to_string(),
            delivery: "12:00 PM".to_string(),
            cutoff_hour: 9,
        },
        DeliverySlot {
            id: TimeSlot::Dinner,
            label: "Dinner".to_string(),
            cutoff: "3:00 PM".to_string(),
            delivery: "6:00 PM".to_string(),
            cutoff_hour: 15,
        },
        DeliverySlot {
            id: TimeSlot::NextDayBreakfast,
            label: "Next Day Breakfast".to_string(),
            cutoff: "10:00 PM".to_string(),
            delivery: "7:30 AM".to_string(),
            cutoff_hour: 22,
        },
    ];

    Catalog::new(items, add_ons, schedule)
}
