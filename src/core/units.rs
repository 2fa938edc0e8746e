//! Option lists shared by the select fields of the built-in catalog.

use crate::domain::model::SelectOption;

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption::new(value, label)
}

pub const GENDER: &[SelectOption] = &[opt("male", "Male"), opt("female", "Female")];

pub const TEMPERATURE: &[SelectOption] = &[
    opt("celsius", "Celsius"),
    opt("fahrenheit", "Fahrenheit"),
    opt("kelvin", "Kelvin"),
];

// Oven conversions list fahrenheit first.
pub const OVEN_TEMPERATURE: &[SelectOption] =
    &[opt("fahrenheit", "Fahrenheit"), opt("celsius", "Celsius")];

pub const NUTRITION_ACTIVITY: &[SelectOption] = &[
    opt("sedentary", "Sedentary"),
    SelectOption::selected("moderate", "Moderate"),
    opt("active", "Active"),
    opt("athlete", "Athlete"),
];

pub const EXERCISE_INTENSITY: &[SelectOption] = &[
    opt("light", "Light"),
    SelectOption::selected("moderate", "Moderate"),
    opt("vigorous", "Vigorous"),
];

pub const AREA: &[SelectOption] = &[
    opt("sqm", "Square Meter (m²)"),
    opt("sqcm", "Square Centimeter (cm²)"),
    opt("sqkm", "Square Kilometer (km²)"),
    opt("sqft", "Square Feet (ft²)"),
    opt("sqin", "Square Inch (in²)"),
    opt("sqyd", "Square Yard (yd²)"),
    opt("acre", "Acre"),
    opt("hectare", "Hectare"),
];

pub const ENERGY: &[SelectOption] = &[
    opt("joules", "Joules (J)"),
    opt("kilojoules", "Kilojoules (kJ)"),
    opt("calories", "Calories (cal)"),
    opt("kilocalories", "Kilocalories (kcal)"),
    opt("watt_hours", "Watt-hours (Wh)"),
    opt("kilowatt_hours", "Kilowatt-hours (kWh)"),
];

pub const LENGTH: &[SelectOption] = &[
    opt("meters", "Meters (m)"),
    opt("kilometers", "Kilometers (km)"),
    opt("centimeters", "Centimeters (cm)"),
    opt("millimeters", "Millimeters (mm)"),
    opt("miles", "Miles (mi)"),
    opt("yards", "Yards (yd)"),
    opt("feet", "Feet (ft)"),
    opt("inches", "Inches (in)"),
];

pub const WEIGHT: &[SelectOption] = &[
    opt("kilograms", "Kilograms (kg)"),
    opt("grams", "Grams (g)"),
    opt("milligrams", "Milligrams (mg)"),
    opt("pounds", "Pounds (lb)"),
    opt("ounces", "Ounces (oz)"),
    opt("tons", "Tons (t)"),
];

pub const VOLUME: &[SelectOption] = &[
    opt("liters", "Liters (L)"),
    opt("milliliters", "Milliliters (mL)"),
    opt("gallons", "Gallons (gal)"),
    opt("quarts", "Quarts (qt)"),
    opt("pints", "Pints (pt)"),
    opt("cups", "Cups"),
    opt("fluid_ounces", "Fluid Ounces (fl oz)"),
    opt("cubic_meters", "Cubic Meters (m³)"),
];

pub const TIME: &[SelectOption] = &[
    opt("seconds", "Seconds (s)"),
    opt("minutes", "Minutes (min)"),
    opt("hours", "Hours (hr)"),
    opt("days", "Days"),
    opt("weeks", "Weeks"),
    opt("years", "Years"),
];

pub const SPEED: &[SelectOption] = &[
    opt("meters_per_second", "Meters per Second (m/s)"),
    opt("kilometers_per_hour", "Kilometers per Hour (km/h)"),
    opt("miles_per_hour", "Miles per Hour (mph)"),
    opt("feet_per_second", "Feet per Second (ft/s)"),
    opt("knots", "Knots (nautical mph)"),
];

pub const POWER: &[SelectOption] = &[
    opt("watts", "Watts (W)"),
    opt("kilowatts", "Kilowatts (kW)"),
    opt("horsepower", "Horsepower (HP)"),
    opt("btu_per_hour", "BTU/hour (BTU/hr)"),
];

pub const PRESSURE: &[SelectOption] = &[
    opt("pascals", "Pascals (Pa)"),
    opt("kilopascals", "Kilopascals (kPa)"),
    opt("bar", "Bar"),
    opt("psi", "PSI (Pound per Square Inch)"),
    opt("atmospheres", "Atmospheres (atm)"),
];

/// UTC offsets in hours, UTC 0 selected by default.
pub const UTC_OFFSETS: &[SelectOption] = &[
    opt("-12", "UTC -12"),
    opt("-11", "UTC -11"),
    opt("-10", "UTC -10"),
    opt("-9", "UTC -9"),
    opt("-8", "UTC -8"),
    opt("-7", "UTC -7"),
    opt("-6", "UTC -6"),
    opt("-5", "UTC -5"),
    opt("-4", "UTC -4"),
    opt("-3", "UTC -3"),
    opt("-2", "UTC -2"),
    opt("-1", "UTC -1"),
    SelectOption::selected("0", "UTC 0"),
    opt("1", "UTC +1"),
    opt("2", "UTC +2"),
    opt("3", "UTC +3"),
    opt("3.5", "UTC +3:30"),
    opt("4", "UTC +4"),
    opt("4.5", "UTC +4:30"),
    opt("5", "UTC +5"),
    opt("5.5", "UTC +5:30 (India)"),
    opt("6", "UTC +6"),
    opt("7", "UTC +7"),
    opt("8", "UTC +8"),
    opt("9", "UTC +9"),
    opt("9.5", "UTC +9:30"),
    opt("10", "UTC +10"),
    opt("11", "UTC +11"),
    opt("12", "UTC +12"),
    opt("13", "UTC +13"),
    opt("14", "UTC +14"),
];
