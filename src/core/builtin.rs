//! The compiled-in calculator form catalog.
//!
//! Definitions are listed in product order. A handful of ids (`grade`,
//! `ideal_weight`, `volume_cube`, `volume_cylinder`, `quadratic`) are declared
//! twice; [`Catalog`](crate::core::catalog::Catalog) keeps the first one.

use crate::core::units;
use crate::domain::model::{CalculatorForm, FieldSpec, SelectOption};

fn form(id: &'static str, fields: Vec<FieldSpec>) -> CalculatorForm {
    CalculatorForm::new(id, fields)
}

fn number_list() -> Vec<FieldSpec> {
    vec![FieldSpec::text("numbers", "Numbers (comma-separated)")]
}

fn two_points() -> Vec<FieldSpec> {
    vec![
        FieldSpec::number("x1", "Point 1 - X coordinate").with_step(0.01),
        FieldSpec::number("y1", "Point 1 - Y coordinate").with_step(0.01),
        FieldSpec::number("x2", "Point 2 - X coordinate").with_step(0.01),
        FieldSpec::number("y2", "Point 2 - Y coordinate").with_step(0.01),
    ]
}

fn two_integers() -> Vec<FieldSpec> {
    vec![
        FieldSpec::number("a", "Number A"),
        FieldSpec::number("b", "Number B"),
    ]
}

fn choose_r_of_n() -> Vec<FieldSpec> {
    vec![
        FieldSpec::number("n", "Total Items (n)"),
        FieldSpec::number("r", "Items to Choose (r)"),
    ]
}

fn date_range(first: &'static str, second: &'static str) -> Vec<FieldSpec> {
    vec![
        FieldSpec::date("date1", first),
        FieldSpec::date("date2", second),
    ]
}

fn mass_and(name: &'static str, label: &'static str) -> Vec<FieldSpec> {
    vec![
        FieldSpec::number("mass", "Mass (kg)").with_step(0.01),
        FieldSpec::number(name, label).with_step(0.01),
    ]
}

fn force_and(name: &'static str, label: &'static str) -> Vec<FieldSpec> {
    vec![
        FieldSpec::number("force", "Force (N)").with_step(0.01),
        FieldSpec::number(name, label).with_step(0.01),
    ]
}

fn decimal_number() -> Vec<FieldSpec> {
    vec![FieldSpec::number("number", "Decimal Number")]
}

fn weight_and_activity() -> Vec<FieldSpec> {
    vec![
        FieldSpec::number("weight", "Weight (kg)").with_step(0.1),
        FieldSpec::select("activity", "Activity Level", units::NUTRITION_ACTIVITY),
    ]
}

fn room_floor() -> Vec<FieldSpec> {
    vec![
        FieldSpec::number("length", "Length (ft)").with_step(0.01),
        FieldSpec::number("width", "Width (ft)").with_step(0.01),
    ]
}

fn cube() -> CalculatorForm {
    form(
        "volume_cube",
        vec![FieldSpec::number("side", "Side Length").with_step(0.01)],
    )
}

fn cylinder() -> CalculatorForm {
    form(
        "volume_cylinder",
        vec![
            FieldSpec::number("radius", "Radius").with_step(0.01),
            FieldSpec::number("height", "Height").with_step(0.01),
        ],
    )
}

fn gender() -> FieldSpec {
    FieldSpec::select("gender", "Gender", units::GENDER)
}

/// `value` plus `from`/`to` unit selects over the same list.
fn unit_conversion(
    id: &'static str,
    placeholder: &'static str,
    options: &'static [SelectOption],
) -> CalculatorForm {
    form(
        id,
        vec![
            FieldSpec::number("value", "Enter Value")
                .with_step(0.01)
                .with_placeholder(placeholder),
            FieldSpec::select("from", "From Unit", options),
            FieldSpec::select("to", "To Unit", options),
        ],
    )
}

pub fn forms() -> Vec<CalculatorForm> {
    vec![
        // Date & time
        form("age", vec![FieldSpec::date("dob", "Date of Birth")]),
        form("days_between", date_range("Start Date", "End Date")),
        form(
            "bmi",
            vec![
                FieldSpec::number("weight", "Weight (kg)").with_step(0.1),
                FieldSpec::number("height", "Height (cm)").with_step(0.1),
            ],
        ),
        form(
            "simple_interest",
            vec![
                FieldSpec::number("principal", "Principal Amount ($)").with_step(0.01),
                FieldSpec::number("rate", "Interest Rate (%)").with_step(0.01),
                FieldSpec::number("time", "Time (years)").with_step(0.01),
            ],
        ),
        form(
            "tip_calculator",
            vec![
                FieldSpec::number("bill", "Bill Amount ($)").with_step(0.01),
                FieldSpec::number("tip", "Tip Percentage (%)").with_step(0.01),
            ],
        ),
        form(
            "area_circle",
            vec![FieldSpec::number("radius", "Radius").with_step(0.01)],
        ),
        form(
            "percentage",
            vec![
                FieldSpec::number("value", "Value").with_step(0.01),
                FieldSpec::number("percent", "Percentage").with_step(0.01),
            ],
        ),
        form(
            "area-converter",
            vec![
                FieldSpec::number("value", "Enter Value").with_step(0.01),
                FieldSpec::select("fromUnit", "From Unit", units::AREA),
                FieldSpec::select("toUnit", "To Unit", units::AREA),
            ],
        ),
        form(
            "factorial",
            vec![FieldSpec::number("n", "Number").with_min(0.0).with_max(170.0)],
        ),
        form(
            "speed",
            vec![
                FieldSpec::number("distance", "Distance").with_step(0.01),
                FieldSpec::number("time", "Time").with_step(0.01),
            ],
        ),
        form(
            "unit_temperature",
            vec![
                FieldSpec::number("temp", "Temperature").with_step(0.01),
                FieldSpec::select("from", "From", units::TEMPERATURE),
                FieldSpec::select("to", "To", units::TEMPERATURE),
            ],
        ),
        form(
            "compound_interest",
            vec![
                FieldSpec::number("principal", "Principal Amount ($)").with_step(0.01),
                FieldSpec::number("rate", "Interest Rate (%)").with_step(0.01),
                FieldSpec::number("time", "Time (years)").with_step(0.01),
                FieldSpec::number("compounds", "Compounds per year").with_value(12.0),
            ],
        ),
        form(
            "loan_payment",
            vec![
                FieldSpec::number("principal", "Loan Amount ($)").with_step(0.01),
                FieldSpec::number("rate", "Annual Interest Rate (%)").with_step(0.01),
                FieldSpec::number("months", "Loan Term (months)"),
            ],
        ),
        form(
            "area_rectangle",
            vec![
                FieldSpec::number("length", "Length").with_step(0.01),
                FieldSpec::number("width", "Width").with_step(0.01),
            ],
        ),
        form(
            "area_triangle",
            vec![
                FieldSpec::number("base", "Base").with_step(0.01),
                FieldSpec::number("height", "Height").with_step(0.01),
            ],
        ),
        form(
            "volume_sphere",
            vec![FieldSpec::number("radius", "Radius").with_step(0.01)],
        ),
        form(
            "pythagorean",
            vec![
                FieldSpec::number("a", "Side A (leave empty to calculate)")
                    .with_step(0.01)
                    .with_optional(),
                FieldSpec::number("b", "Side B (leave empty to calculate)")
                    .with_step(0.01)
                    .with_optional(),
                FieldSpec::number("c", "Hypotenuse C (leave empty to calculate)")
                    .with_step(0.01)
                    .with_optional(),
            ],
        ),
        form(
            "bmr",
            vec![
                FieldSpec::number("weight", "Weight (kg)").with_step(0.1),
                FieldSpec::number("height", "Height (cm)").with_step(0.1),
                FieldSpec::number("age", "Age"),
                gender(),
            ],
        ),
        form(
            "gpa",
            vec![
                FieldSpec::number("points", "Total Grade Points").with_step(0.01),
                FieldSpec::number("credits", "Total Credit Hours").with_step(0.01),
            ],
        ),
        form("force", mass_and("acceleration", "Acceleration (m/s²)")),
        form("kinetic_energy", mass_and("velocity", "Velocity (m/s)")),
        form("gcd", two_integers()),
        form("lcm", two_integers()),
        form("mean", number_list()),
        form(
            "fuel_efficiency",
            vec![
                FieldSpec::number("distance", "Distance (miles)").with_step(0.01),
                FieldSpec::number("fuel", "Fuel Used (gallons)").with_step(0.01),
            ],
        ),
        form("binary", decimal_number()),
        form("hex", decimal_number()),
        form("prime_check", vec![FieldSpec::number("number", "Number")]),
        form(
            "fibonacci",
            vec![FieldSpec::number("n", "Number of Terms")
                .with_min(1.0)
                .with_max(50.0)],
        ),
        form(
            "random_number",
            vec![
                FieldSpec::number("min", "Minimum").with_value(1.0),
                FieldSpec::number("max", "Maximum").with_value(100.0),
            ],
        ),
        form(
            "date_add",
            vec![
                FieldSpec::date("date", "Start Date"),
                FieldSpec::number("days", "Days to Add"),
            ],
        ),
        form("weekday", vec![FieldSpec::date("date", "Date")]),
        form("leap_year", vec![FieldSpec::number("year", "Year")]),
        form("median", number_list()),
        form("mode", number_list()),
        form("standard_deviation", number_list()),
        form("variance", number_list()),
        cube(),
        cylinder(),
        form(
            "area_trapezoid",
            vec![
                FieldSpec::number("base1", "Base 1").with_step(0.01),
                FieldSpec::number("base2", "Base 2").with_step(0.01),
                FieldSpec::number("height", "Height").with_step(0.01),
            ],
        ),
        form(
            "quadratic",
            vec![
                FieldSpec::number("a", "Coefficient a").with_step(0.01),
                FieldSpec::number("b", "Coefficient b").with_step(0.01),
                FieldSpec::number("c", "Coefficient c").with_step(0.01),
            ],
        ),
        form("permutation", choose_r_of_n()),
        form("combination", choose_r_of_n()),
        form("distance", two_points()),
        form("slope", two_points()),
        form(
            "percentage_change",
            vec![
                FieldSpec::number("old", "Old Value").with_step(0.01),
                FieldSpec::number("new", "New Value").with_step(0.01),
            ],
        ),
        form(
            "percentage_of",
            vec![
                FieldSpec::number("value", "Value").with_step(0.01),
                FieldSpec::number("percent", "Percentage").with_step(0.01),
            ],
        ),
        form(
            "investment_return",
            vec![
                FieldSpec::number("principal", "Principal ($)").with_step(0.01),
                FieldSpec::number("rate", "Annual Return Rate (%)").with_step(0.01),
                FieldSpec::number("time", "Time (years)").with_step(0.01),
            ],
        ),
        form(
            "acceleration",
            vec![
                FieldSpec::number("initial_velocity", "Initial Velocity (m/s)")
                    .with_step(0.01)
                    .with_value(0.0),
                FieldSpec::number("final_velocity", "Final Velocity (m/s)").with_step(0.01),
                FieldSpec::number("time", "Time (seconds)").with_step(0.01),
            ],
        ),
        form("age_difference", date_range("First Date", "Second Date")),
        form("octal", decimal_number()),
        form("density", mass_and("volume", "Volume (m³)")),
        form("momentum", mass_and("velocity", "Velocity (m/s)")),
        form("potential_energy", mass_and("height", "Height (m)")),
        form(
            "power_physics",
            vec![
                FieldSpec::number("work", "Work (J)").with_step(0.01),
                FieldSpec::number("time", "Time (s)").with_step(0.01),
            ],
        ),
        form("work", force_and("distance", "Distance (m)")),
        form("pressure_physics", force_and("area", "Area (m²)")),
        // Education
        form(
            "grade",
            vec![
                FieldSpec::number("score", "Score Earned").with_step(0.01),
                FieldSpec::number("total", "Total Points").with_step(0.01),
            ],
        ),
        form(
            "test_score",
            vec![
                FieldSpec::number("correct", "Correct Answers"),
                FieldSpec::number("total", "Total Questions"),
            ],
        ),
        form(
            "final_grade",
            vec![
                FieldSpec::number("current_grade", "Current Grade (%)").with_step(0.01),
                FieldSpec::number("desired_grade", "Desired Grade (%)").with_step(0.01),
                FieldSpec::number("final_weight", "Final Exam Weight (%)").with_step(0.01),
            ],
        ),
        form(
            "cgpa",
            vec![FieldSpec::text("grades", "GPAs (comma-separated)")
                .with_placeholder("3.5, 3.8, 4.0")],
        ),
        // Nutrition
        form("protein_needs", weight_and_activity()),
        form("carbs_needs", weight_and_activity()),
        form(
            "fiber_needs",
            vec![FieldSpec::number("age", "Age"), gender()],
        ),
        // Environment & conversions
        form(
            "carbon_footprint",
            vec![
                FieldSpec::number("electricity", "Electricity Usage (kWh/year)")
                    .with_step(0.01)
                    .with_placeholder("e.g., 1200"),
                FieldSpec::number("gas", "Natural Gas Usage (Therms/year)")
                    .with_step(0.01)
                    .with_placeholder("e.g., 450"),
                FieldSpec::number("car_miles", "Car Travel (Miles/year)")
                    .with_step(0.01)
                    .with_placeholder("e.g., 8000"),
                FieldSpec::number("flights", "Number of Flights per Year")
                    .with_step(1.0)
                    .with_placeholder("e.g., 3"),
            ],
        ),
        form(
            "correlation",
            vec![
                FieldSpec::text("x_values", "Enter X Values (comma-separated)")
                    .with_placeholder("Example: 2, 4, 6, 8, 10"),
                FieldSpec::text("y_values", "Enter Y Values (comma-separated)")
                    .with_placeholder("Example: 3, 5, 7, 9, 11"),
            ],
        )
        .with_note("⚠ X and Y must have the same number of values."),
        unit_conversion("unit_energy", "Enter energy amount", units::ENERGY),
        form(
            "lease_vs_buy",
            vec![
                FieldSpec::number("lease_payment", "Monthly Lease Payment ($)")
                    .with_step(0.01)
                    .with_placeholder("e.g., 250"),
                FieldSpec::number("lease_months", "Lease Term (Months)")
                    .with_placeholder("e.g., 36"),
                FieldSpec::number("loan_payment", "Monthly Loan Payment ($)")
                    .with_step(0.01)
                    .with_placeholder("e.g., 350"),
                FieldSpec::number("loan_months", "Loan Term (Months)")
                    .with_placeholder("e.g., 48"),
            ],
        ),
        unit_conversion("unit_length", "Enter length", units::LENGTH),
        unit_conversion("unit_weight", "Enter weight", units::WEIGHT),
        unit_conversion("unit_volume", "Enter volume", units::VOLUME),
        form(
            "tree_offset",
            vec![FieldSpec::number("co2", "Enter CO₂ Emissions (kg per year)")
                .with_step(0.01)
                .with_placeholder("e.g., 1200")],
        )
        .with_note("🌱 Approx. 1 tree offsets ~21.77 kg CO₂ per year."),
        form(
            "tire_size",
            vec![
                FieldSpec::number("width", "Tire Width (mm)")
                    .with_step(0.01)
                    .with_placeholder("e.g., 205"),
                FieldSpec::number("aspect", "Aspect Ratio (%)")
                    .with_step(0.01)
                    .with_placeholder("e.g., 55"),
                FieldSpec::number("diameter", "Rim Diameter (inches)")
                    .with_step(0.01)
                    .with_placeholder("e.g., 16"),
            ],
        )
        .with_note(
            "📌 Formula uses: total diameter = rim diameter × 25.4 + 2 × sidewall height.",
        ),
        form(
            "time_zone",
            vec![
                FieldSpec::time("time", "Select Time"),
                FieldSpec::select(
                    "from_offset",
                    "From Time Zone (UTC Offset)",
                    units::UTC_OFFSETS,
                ),
                FieldSpec::select("to_offset", "To Time Zone (UTC Offset)", units::UTC_OFFSETS),
            ],
        ),
        unit_conversion("unit_time", "Enter time value", units::TIME),
        unit_conversion("unit_speed", "Enter speed value", units::SPEED),
        form(
            "solar_panels",
            vec![
                FieldSpec::number("monthly_bill", "Monthly Electricity Bill ($)")
                    .with_step(0.01)
                    .with_placeholder("e.g., 120"),
                FieldSpec::number("rate", "Electricity Rate ($ per kWh)")
                    .with_step(0.001)
                    .with_placeholder("Default: 0.12")
                    .with_optional(),
            ],
        )
        .with_note("⚡ Assumption: Each solar panel generates approx. 1.5 kWh/day."),
        unit_conversion("unit_power", "Enter power value", units::POWER),
        unit_conversion("unit_pressure", "Enter pressure value", units::PRESSURE),
        form(
            "recycling",
            vec![
                FieldSpec::number("paper", "Paper Recycled (kg/year)")
                    .with_step(0.01)
                    .with_placeholder("e.g., 20")
                    .with_optional(),
                FieldSpec::number("plastic", "Plastic Recycled (kg/year)")
                    .with_step(0.01)
                    .with_placeholder("e.g., 15")
                    .with_optional(),
                FieldSpec::number("glass", "Glass Recycled (kg/year)")
                    .with_step(0.01)
                    .with_placeholder("e.g., 10")
                    .with_optional(),
                FieldSpec::number("metal", "Metal Recycled (kg/year)")
                    .with_step(0.01)
                    .with_placeholder("e.g., 8")
                    .with_optional(),
            ],
        )
        .with_note("♻ Recycling reduces CO₂ emissions and conserves energy."),
        // Everyday
        form(
            "sleep_hours",
            vec![
                FieldSpec::time("bedtime", "Bedtime"),
                FieldSpec::time("waketime", "Wake Time"),
            ],
        ),
        form("next_birthday", vec![FieldSpec::date("dob", "Date of Birth")]),
        form("countdown", vec![FieldSpec::date("date", "Target Date")]),
        form("work_days", date_range("Start Date", "End Date")),
        form(
            "car_loan",
            vec![
                FieldSpec::number("principal", "Loan Amount ($)").with_step(0.01),
                FieldSpec::number("rate", "Interest Rate (%)").with_step(0.01),
                FieldSpec::number("months", "Loan Term (months)"),
            ],
        ),
        form(
            "fuel_cost",
            vec![
                FieldSpec::number("distance", "Distance (miles)").with_step(0.01),
                FieldSpec::number("mpg", "MPG").with_step(0.01),
                FieldSpec::number("price", "Price per Gallon ($)").with_step(0.01),
            ],
        ),
        form(
            "electricity_cost",
            vec![
                FieldSpec::number("watts", "Power (Watts)").with_step(0.01),
                FieldSpec::number("hours", "Hours Used").with_step(0.01),
                FieldSpec::number("rate", "Rate ($/kWh)")
                    .with_step(0.01)
                    .with_value(0.12),
            ],
        ),
        form(
            "tile_needed",
            vec![
                FieldSpec::number("length", "Room Length (ft)").with_step(0.01),
                FieldSpec::number("width", "Room Width (ft)").with_step(0.01),
                FieldSpec::number("tile_size", "Tile Size (ft)")
                    .with_step(0.01)
                    .with_value(1.0),
            ],
        ),
        form("flooring", room_floor()),
        form("fence", room_floor()),
        form("concrete", {
            let mut fields = room_floor();
            fields.push(FieldSpec::number("depth", "Depth (inches)").with_step(0.01));
            fields
        }),
        form("roofing", {
            let mut fields = room_floor();
            fields.push(
                FieldSpec::number("pitch", "Roof Pitch (optional)")
                    .with_step(0.01)
                    .with_value(0.0)
                    .with_optional(),
            );
            fields
        }),
        form(
            "recipe_scaler",
            vec![
                FieldSpec::number("original_servings", "Original Servings").with_step(0.01),
                FieldSpec::number("desired_servings", "Desired Servings").with_step(0.01),
            ],
        ),
        form(
            "oven_temp",
            vec![
                FieldSpec::number("temp", "Temperature").with_step(1.0),
                FieldSpec::select("from", "From", units::OVEN_TEMPERATURE),
                FieldSpec::select("to", "To", units::OVEN_TEMPERATURE),
            ],
        ),
        form(
            "cooking_time",
            vec![
                FieldSpec::number("weight", "Weight (lbs or kg)").with_step(0.01),
                FieldSpec::number("time_per_unit", "Minutes per Unit")
                    .with_step(1.0)
                    .with_value(20.0),
            ],
        ),
        form(
            "paint_needed",
            vec![
                FieldSpec::number("length", "Length (feet)").with_step(0.01),
                FieldSpec::number("width", "Width (feet)").with_step(0.01),
                FieldSpec::number("height", "Height (feet, optional)")
                    .with_step(0.01)
                    .with_optional(),
                FieldSpec::number("coats", "Number of Coats").with_value(1.0),
                FieldSpec::number("coverage", "Coverage per gallon (sq ft)").with_value(350.0),
            ],
        ),
        form(
            "savings_goal",
            vec![
                FieldSpec::number("goal", "Savings Goal ($)").with_step(0.01),
                FieldSpec::number("rate", "Interest Rate (%)")
                    .with_step(0.01)
                    .with_value(0.0)
                    .with_optional(),
                FieldSpec::number("months", "Time (months)"),
            ],
        ),
        form(
            "currency_converter",
            vec![
                FieldSpec::number("amount", "Amount").with_step(0.01),
                FieldSpec::number("from_rate", "From Rate (to USD)")
                    .with_step(0.0001)
                    .with_value(1.0),
                FieldSpec::number("to_rate", "To Rate (from USD)")
                    .with_step(0.0001)
                    .with_value(1.0),
            ],
        ),
        form(
            "roman_numeral",
            vec![FieldSpec::number("number", "Number (1-3999)")
                .with_min(1.0)
                .with_max(3999.0)],
        ),
        // Health
        form(
            "alcohol_units",
            vec![
                FieldSpec::number("volume", "Volume (ml)").with_step(0.01),
                FieldSpec::number("abv", "ABV (%)").with_step(0.1),
            ],
        ),
        form(
            "body_fat",
            vec![
                FieldSpec::number("weight", "Weight (kg)").with_step(0.1),
                FieldSpec::number("waist", "Waist (cm)").with_step(0.1),
                FieldSpec::number("height", "Height (cm)").with_step(0.1),
                gender(),
            ],
        ),
        form(
            "ideal_weight",
            vec![
                FieldSpec::number("height", "Height (cm)").with_step(0.1),
                gender(),
            ],
        ),
        form(
            "calories_burned",
            vec![
                FieldSpec::number("weight", "Weight (kg)").with_step(0.1),
                FieldSpec::number("duration", "Duration (minutes)").with_step(1.0),
                FieldSpec::select("activity", "Activity Level", units::EXERCISE_INTENSITY),
            ],
        ),
        form(
            "water_intake",
            vec![
                FieldSpec::number("weight", "Weight (kg)").with_step(0.1),
                FieldSpec::number("activity", "Activity Hours")
                    .with_step(0.1)
                    .with_value(0.0)
                    .with_optional(),
            ],
        ),
        form("heart_rate", vec![FieldSpec::number("age", "Age")]),
        // Finance
        form(
            "mortgage",
            vec![
                FieldSpec::number("price", "Home Price ($)").with_step(0.01),
                FieldSpec::number("down", "Down Payment ($)").with_step(0.01),
                FieldSpec::number("rate", "Interest Rate (%)").with_step(0.01),
                FieldSpec::number("years", "Loan Term (years)"),
            ],
        ),
        form(
            "fuel_economy",
            vec![
                FieldSpec::number("distance", "Distance (miles)").with_step(0.01),
                FieldSpec::number("fuel", "Fuel Used (gallons)").with_step(0.01),
            ],
        ),
        form(
            "discount",
            vec![
                FieldSpec::number("price", "Original Price ($)").with_step(0.01),
                FieldSpec::number("discount", "Discount (%)").with_step(0.01),
            ],
        ),
        form(
            "tax",
            vec![
                FieldSpec::number("amount", "Amount ($)").with_step(0.01),
                FieldSpec::number("rate", "Tax Rate (%)").with_step(0.01),
            ],
        ),
        // Shadowed by the earlier `grade`.
        form(
            "grade",
            vec![
                FieldSpec::number("earned", "Points Earned").with_step(0.01),
                FieldSpec::number("total", "Total Points").with_step(0.01),
            ],
        ),
        form(
            "retirement",
            vec![
                FieldSpec::number("age", "Current Age"),
                FieldSpec::number("retire_age", "Retirement Age"),
                FieldSpec::number("monthly", "Monthly Savings ($)").with_step(0.01),
                FieldSpec::number("return", "Annual Return (%)")
                    .with_step(0.01)
                    .with_value(7.0),
            ],
        ),
        form(
            "investment",
            vec![
                FieldSpec::number("initial", "Initial Investment ($)").with_step(0.01),
                FieldSpec::number("monthly", "Monthly Contribution ($)").with_step(0.01),
                FieldSpec::number("return", "Annual Return (%)").with_step(0.01),
                FieldSpec::number("years", "Years"),
            ],
        ),
        // Shadowed by the earlier `ideal_weight`.
        form(
            "ideal_weight",
            vec![
                gender(),
                FieldSpec::number("height", "Height (cm)").with_step(0.1),
            ],
        ),
        form(
            "pregnancy",
            vec![FieldSpec::date("lmp", "Last Menstrual Period")],
        ),
        form(
            "area_square",
            vec![FieldSpec::number("side", "Side Length").with_step(0.01)],
        ),
        cube(),
        cylinder(),
        // Shadowed by the earlier `quadratic`.
        form(
            "quadratic",
            vec![
                FieldSpec::number("a", "a (coefficient of x²)").with_step(0.01),
                FieldSpec::number("b", "b (coefficient of x)").with_step(0.01),
                FieldSpec::number("c", "c (constant)").with_step(0.01),
            ],
        ),
    ]
}
