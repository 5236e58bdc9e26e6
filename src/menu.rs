use std::io::{BufRead, Write};
use tabled::{settings::Style, Table, Tabled};
use tracing::error;

use crate::book::{ClientBook, Lookup};
use crate::error::{ClientError, Result};
use crate::model::{ClientRecord, ClientType, NewClient};
use crate::search::Criterion;
use crate::validate::classify_contact;

// Table row structs for tabled
#[derive(Tabled)]
struct ClientRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NUMBER")]
    number: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "TYPE")]
    kind: String,
    #[tabled(rename = "CONTACT")]
    contact: String,
    #[tabled(rename = "SERVICES")]
    services: String,
}

#[derive(Tabled)]
struct CandidateRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NUMBER")]
    number: String,
}

fn format_services(services: &[String]) -> String {
    format!("[{}]", services.join(", "))
}

fn summary_line(id: &str, record: &ClientRecord) -> String {
    format!(
        "ID: {}, Number: {}, Name: {}, Type: {}, Contact: {}, Services: {}, Registered: {}",
        id,
        record.number,
        record.full_name(),
        record.kind,
        record.contact,
        format_services(&record.services),
        record.registered
    )
}

/// Interactive text menu over a [`ClientBook`].
pub struct Menu<'a, R, W> {
    book: &'a mut ClientBook,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(book: &'a mut ClientBook, input: R, output: W) -> Self {
        Self {
            book,
            input,
            output,
        }
    }

    /// Loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "=== Client Management ===")?;
            writeln!(self.output, "1. Create client")?;
            writeln!(self.output, "2. Read client (by number, ID or name)")?;
            writeln!(self.output, "3. Update client (add service)")?;
            writeln!(self.output, "4. Delete client")?;
            writeln!(self.output, "5. List all clients")?;
            writeln!(self.output, "6. Exit")?;

            let Some(choice) = self.prompt("Select an option (1-6): ")? else {
                writeln!(self.output)?;
                break;
            };

            match choice.as_str() {
                "1" => self.create()?,
                "2" => self.read()?,
                "3" => self.update()?,
                "4" => self.delete()?,
                "5" => self.list()?,
                "6" => break,
                _ => writeln!(
                    self.output,
                    "Invalid option. Please select an option between 1 and 6."
                )?,
            }
        }

        writeln!(self.output, "Exiting...")?;
        Ok(())
    }

    /// Print a label and read one trimmed line; `None` on end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn create(&mut self) -> Result<()> {
        let Some(given_name) = self.prompt("Given name: ")? else {
            return Ok(());
        };
        if given_name.is_empty() {
            return self.report(ClientError::EmptyGivenName);
        }

        let Some(family_name) = self.prompt("Family name: ")? else {
            return Ok(());
        };
        if family_name.is_empty() {
            return self.report(ClientError::EmptyFamilyName);
        }

        let Some(kind) = self.prompt("Type (Persona/Negocio): ")? else {
            return Ok(());
        };
        if let Err(e) = ClientType::parse(&kind) {
            return self.report(e);
        }

        let Some(contact) = self.prompt("Contact (phone or email): ")? else {
            return Ok(());
        };
        if classify_contact(&contact).is_none() {
            return self.report(ClientError::InvalidContact(contact));
        }

        let input = NewClient {
            given_name,
            family_name,
            kind,
            contact,
        };
        match self.book.create(input) {
            Ok(created) => writeln!(
                self.output,
                "Client created with ID: {} and number: {}",
                created.id, created.record.number
            )?,
            Err(e) if e.is_validation() => self.report(e)?,
            Err(e) => {
                error!(error = %e, "failed to create client");
                writeln!(self.output, "Error creating client: {e}")?;
            }
        }
        Ok(())
    }

    /// Ask for a criterion and a value, then run the search.
    fn search(&mut self, verb: &str) -> Result<Option<(Criterion, String)>> {
        let label = format!("{verb} by (1) number, (2) ID or (3) name (1/2/3): ");
        let Some(choice) = self.prompt(&label)? else {
            return Ok(None);
        };
        let criterion = match Criterion::from_choice(&choice) {
            Ok(criterion) => criterion,
            Err(_) => {
                writeln!(
                    self.output,
                    "Invalid option. Use 1 for number, 2 for ID or 3 for name."
                )?;
                return Ok(None);
            }
        };

        let label = match criterion {
            Criterion::Number => "Client number (e.g. C001): ",
            Criterion::Id => "Client ID: ",
            Criterion::Name => "Name or part of the name: ",
        };
        Ok(self.prompt(label)?.map(|value| (criterion, value)))
    }

    fn read(&mut self) -> Result<()> {
        let Some((criterion, value)) = self.search("Search")? else {
            return Ok(());
        };

        let found = self.book.find(criterion, &value);
        if found.is_empty() {
            writeln!(self.output, "No clients found matching that criterion.")?;
            return Ok(());
        }
        for (id, record) in &found {
            writeln!(self.output, "{}", summary_line(id, record))?;
        }
        Ok(())
    }

    fn update(&mut self) -> Result<()> {
        let Some((criterion, value)) = self.search("Update")? else {
            return Ok(());
        };

        let mut found = self.book.find(criterion, &value);
        if found.len() > 1 {
            return self.report_ambiguous(&found);
        }
        let Some((id, _)) = found.pop() else {
            writeln!(self.output, "No clients found matching that criterion.")?;
            return Ok(());
        };

        let Some(service) = self.prompt("New service to add: ")? else {
            return Ok(());
        };
        match self.book.add_service(Criterion::Id, &id, &service) {
            Ok(Lookup::Done(id, record)) => writeln!(
                self.output,
                "Service '{}' added to client {} ({} | {}).",
                service.trim(),
                id,
                record.full_name(),
                record.number
            )?,
            Ok(Lookup::NotFound) => {
                writeln!(self.output, "No clients found matching that criterion.")?
            }
            Ok(Lookup::Ambiguous(found)) => self.report_ambiguous(&found)?,
            Err(e) if e.is_validation() => self.report(e)?,
            Err(e) => writeln!(self.output, "Error updating client: {e}")?,
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<()> {
        let Some((criterion, value)) = self.search("Delete")? else {
            return Ok(());
        };

        match self.book.delete(criterion, &value) {
            Ok(Lookup::Done(id, record)) => writeln!(
                self.output,
                "Client {} (number: {}) deleted.",
                id, record.number
            )?,
            Ok(Lookup::NotFound) => {
                writeln!(self.output, "No clients found matching that criterion.")?
            }
            Ok(Lookup::Ambiguous(found)) => self.report_ambiguous(&found)?,
            Err(e) => writeln!(self.output, "Error deleting client: {e}")?,
        }
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        let clients = self.book.list();
        if clients.is_empty() {
            writeln!(self.output, "No clients registered.")?;
            return Ok(());
        }

        let rows: Vec<ClientRow> = clients
            .iter()
            .map(|(id, record)| ClientRow {
                id: id.clone(),
                number: record.number.clone(),
                name: record.full_name(),
                kind: record.kind.to_string(),
                contact: record.contact.clone(),
                services: format_services(&record.services),
            })
            .collect();

        let table = Table::new(rows).with(Style::rounded()).to_string();
        writeln!(self.output, "{table}")?;
        writeln!(self.output, "Total: {} clients", clients.len())?;
        Ok(())
    }

    fn report(&mut self, e: ClientError) -> Result<()> {
        writeln!(self.output, "{e}")?;
        Ok(())
    }

    fn report_ambiguous(&mut self, found: &[(String, ClientRecord)]) -> Result<()> {
        writeln!(
            self.output,
            "Multiple clients found. Use the client number or ID to be more specific:"
        )?;
        let rows: Vec<CandidateRow> = found
            .iter()
            .map(|(id, record)| CandidateRow {
                id: id.clone(),
                number: record.number.clone(),
            })
            .collect();
        let table = Table::new(rows).with(Style::rounded()).to_string();
        writeln!(self.output, "{table}")?;
        Ok(())
    }
}
