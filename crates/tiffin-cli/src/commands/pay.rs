use anyhow::Result;

use tiffin_core::payment::{InputField, PaymentForm, PaymentMethod};

pub fn run(
    method: PaymentMethod,
    card_number: Option<String>,
    upi_id: Option<String>,
) -> Result<()> {
    println!("Complete Payment\n");
    for option in PaymentMethod::ALL {
        let marker = if option == method { "(*)" } else { "( )" };
        println!("  {} {}", marker, option);
    }

    let mut form = PaymentForm::new();
    form.set_method(method);
    if let Some(card_number) = card_number {
        form.set_card_number(card_number);
    }
    if let Some(upi_id) = upi_id {
        form.set_upi_id(upi_id);
    }

    if let Some(field) = form.input_field() {
        let flag = match field {
            InputField::CardNumber => "--card-number",
            InputField::UpiId => "--upi-id",
        };
        println!("\n  {} ({})", field.placeholder(), flag);
    }

    let confirmation = form.submit()?;
    println!("\n{}", confirmation.title);
    println!("{}", confirmation.description);
    println!("Reference: {}", confirmation.reference);

    Ok(())
}
