//! Text rendering for the menu and its reports.

use stockroom_inventory::{Item, Money};

pub const MENU: &str = "Choose what you would like to do with your inventory.\n\
    \t(1) Add a new item to the inventory.\n\
    \t(2) Remove an item in the inventory.\n\
    \t(3) View all inventory items in a tabular format.\n\
    \t(4) Calculate the total value of the inventory.\n\
    \t(5) Exit the program.\n";

pub const NO_ITEMS: &str = "There are no items in your inventory.";

const NAME_WIDTH: usize = 18;
const QUANTITY_WIDTH: usize = 12;
const PRICE_WIDTH: usize = 12;

/// Left-aligned three-column table, or [`NO_ITEMS`] for an empty inventory.
pub fn inventory_table(items: &[Item]) -> String {
    if items.is_empty() {
        return format!("{NO_ITEMS}\n");
    }

    let mut out = format!(
        "{:<NAME_WIDTH$}{:<QUANTITY_WIDTH$}{:<PRICE_WIDTH$}\n",
        "ITEM NAME", "QUANTITY", "PRICE"
    );
    for item in items {
        // The `$` sign takes one column of the price cell.
        out.push_str(&format!(
            "{:<NAME_WIDTH$}{:<QUANTITY_WIDTH$}${:<width$}\n",
            item.name(),
            item.quantity(),
            item.price(),
            width = PRICE_WIDTH - 1
        ));
    }
    out
}

/// `(1) A, (2) B, (3) C`
pub fn numbered_names<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| format!("({}) {name}", i + 1))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn total_value(total: Money) -> String {
    format!("The total value of the current items in the inventory is ${total}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_inventory::{ItemName, Price, Quantity};

    fn item(name: &str, quantity: u32, price: &str) -> Item {
        Item::new(
            ItemName::new(name).unwrap(),
            Quantity::new(quantity).unwrap(),
            Price::parse(price).unwrap(),
        )
    }

    #[test]
    fn empty_inventory_renders_no_items_message() {
        assert_eq!(inventory_table(&[]), "There are no items in your inventory.\n");
    }

    #[test]
    fn table_columns_are_left_aligned_to_fixed_widths() {
        let table = inventory_table(&[item("widget", 12, "3.5"), item("gear", 1000, "10000")]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "ITEM NAME         QUANTITY    PRICE       ");
        assert_eq!(lines[1], "widget            12          $3.50       ");
        assert_eq!(lines[2], "gear              1000        $10000.00   ");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn numbered_names_are_one_based_and_comma_separated() {
        assert_eq!(numbered_names(["A", "B", "C"]), "(1) A, (2) B, (3) C");
        assert_eq!(numbered_names(["solo"]), "(1) solo");
        assert_eq!(numbered_names(Vec::<&str>::new()), "");
    }

    #[test]
    fn total_value_has_currency_and_two_decimals() {
        assert_eq!(
            total_value(Money::from_cents(1700)),
            "The total value of the current items in the inventory is $17.00."
        );
    }
}
