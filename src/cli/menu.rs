//! Interactive menu loop
//!
//! Reads a menu choice, runs one service operation and prints the result,
//! until the user picks Exit or the input ends. Errors end the current
//! selection only; the loop always returns to the menu.

use std::io::{BufRead, Write};

use crate::display::{format_activity_report, format_savings_outcome, format_user_list};
use crate::error::{BudgetError, BudgetResult};
use crate::models::is_valid_email;
use crate::services::BudgetService;
use crate::storage::UserStore;

use super::prompt::{prompt_positive_amount, prompt_string};

/// Menu text shown before every choice
pub const MENU_TEXT: &str = "\n--- Personal Budget Planner ---\n\
1. Create User\n\
2. View Users\n\
3. Update User\n\
4. Delete User\n\
5. Generate Report\n\
6. Calculate Savings Duration\n\
7. Exit";

/// A menu option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateUser,
    ViewUsers,
    UpdateUser,
    DeleteUser,
    GenerateReport,
    SavingsDuration,
    Exit,
}

impl MenuChoice {
    /// Parse the number typed at the menu prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::CreateUser),
            "2" => Some(Self::ViewUsers),
            "3" => Some(Self::UpdateUser),
            "4" => Some(Self::DeleteUser),
            "5" => Some(Self::GenerateReport),
            "6" => Some(Self::SavingsDuration),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

/// The interactive menu over any input and output
pub struct Menu<S: UserStore, R: BufRead, W: Write> {
    service: BudgetService<S>,
    input: R,
    output: W,
}

impl<S: UserStore, R: BufRead, W: Write> Menu<S, R, W> {
    /// Create a menu driving the given service
    pub fn new(service: BudgetService<S>, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Hand back the service, e.g. to inspect the session log
    pub fn into_service(self) -> BudgetService<S> {
        self.service
    }

    /// Run until Exit is chosen or the input ends
    pub fn run(&mut self) -> BudgetResult<()> {
        loop {
            writeln!(self.output, "{}", MENU_TEXT)?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                return self.exit();
            };

            let flow = match MenuChoice::parse(&choice) {
                Some(MenuChoice::CreateUser) => self.create_user()?,
                Some(MenuChoice::ViewUsers) => self.view_users()?,
                Some(MenuChoice::UpdateUser) => self.update_user()?,
                Some(MenuChoice::DeleteUser) => self.delete_user()?,
                Some(MenuChoice::GenerateReport) => self.generate_report()?,
                Some(MenuChoice::SavingsDuration) => self.savings_duration()?,
                Some(MenuChoice::Exit) => return self.exit(),
                None => {
                    writeln!(self.output, "Invalid option.")?;
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                return self.exit();
            }
        }
    }

    fn create_user(&mut self) -> BudgetResult<Flow> {
        let Some(name) = self.prompt("Enter name: ")? else {
            return Ok(Flow::Quit);
        };
        if name.is_empty() {
            writeln!(self.output, "Name cannot be empty.")?;
            return Ok(Flow::Continue);
        }

        let Some(email) = self.prompt("Enter email: ")? else {
            return Ok(Flow::Quit);
        };
        if !is_valid_email(&email) {
            writeln!(self.output, "Invalid email format.")?;
            return Ok(Flow::Continue);
        }

        let Some(income) = self.prompt_amount("Enter income: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(expenses) = self.prompt_amount("Enter expenses: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(savings_goal) = self.prompt_amount("Enter savings goal: ")? else {
            return Ok(Flow::Quit);
        };

        let result = self
            .service
            .create(&name, &email, income, expenses, savings_goal);
        self.print_notices()?;

        match result {
            Ok(user) => {
                writeln!(self.output, "User created: {}", user)?;
                if user.is_overspending() {
                    writeln!(self.output, "Note: expenses exceed income for this user.")?;
                }
            }
            Err(err) => self.print_error(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn view_users(&mut self) -> BudgetResult<Flow> {
        let result = self.service.list();
        self.print_notices()?;

        match result {
            Ok(users) => writeln!(self.output, "{}", format_user_list(&users))?,
            Err(err) => self.print_error(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn update_user(&mut self) -> BudgetResult<Flow> {
        let Some(email) = self.prompt("Enter email of user to update: ")? else {
            return Ok(Flow::Quit);
        };

        let found = self.service.find(&email);
        self.print_notices()?;
        match found {
            Ok(Some(_)) => {}
            Ok(None) => {
                writeln!(self.output, "User not found.")?;
                return Ok(Flow::Continue);
            }
            Err(err) => {
                self.print_error(&err)?;
                return Ok(Flow::Continue);
            }
        }

        let Some(income) = self.prompt_amount("New income: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(expenses) = self.prompt_amount("New expenses: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(savings_goal) = self.prompt_amount("New savings goal: ")? else {
            return Ok(Flow::Quit);
        };

        let result = self.service.update(&email, income, expenses, savings_goal);
        self.print_notices()?;

        match result {
            Ok(user) => writeln!(self.output, "Updated user: {}", user)?,
            Err(err) => self.print_error(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_user(&mut self) -> BudgetResult<Flow> {
        let Some(email) = self.prompt("Enter email of user to delete: ")? else {
            return Ok(Flow::Quit);
        };

        let result = self.service.delete(&email);
        self.print_notices()?;

        match result {
            Ok(user) => writeln!(self.output, "Deleted user: {}", user)?,
            Err(err) => self.print_error(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn generate_report(&mut self) -> BudgetResult<Flow> {
        let result = self.service.report();
        self.print_notices()?;

        match result {
            Ok(report) => write!(self.output, "{}", format_activity_report(&report))?,
            Err(err) => self.print_error(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn savings_duration(&mut self) -> BudgetResult<Flow> {
        let Some(email) = self.prompt("Enter email of user to calculate for: ")? else {
            return Ok(Flow::Quit);
        };

        let result = self.service.savings_duration(&email);
        self.print_notices()?;

        match result {
            Ok(outcome) => writeln!(self.output, "{}", format_savings_outcome(&outcome))?,
            Err(err) => self.print_error(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn exit(&mut self) -> BudgetResult<()> {
        self.service.exit();
        writeln!(self.output, "Exiting application. Goodbye!")?;
        self.output.flush()?;
        Ok(())
    }

    fn prompt(&mut self, prompt: &str) -> BudgetResult<Option<String>> {
        prompt_string(&mut self.input, &mut self.output, prompt)
    }

    fn prompt_amount(&mut self, prompt: &str) -> BudgetResult<Option<f64>> {
        prompt_positive_amount(&mut self.input, &mut self.output, prompt)
    }

    fn print_notices(&mut self) -> BudgetResult<()> {
        for notice in self.service.drain_notices() {
            writeln!(self.output, "{}", notice)?;
        }
        Ok(())
    }

    fn print_error(&mut self, err: &BudgetError) -> BudgetResult<()> {
        let message = match err {
            BudgetError::NotFound { .. } => "User not found.".to_string(),
            BudgetError::Duplicate { identifier, .. } => {
                format!("A user with email {} already exists.", identifier)
            }
            BudgetError::Validation(reason) => format!("{}.", reason),
            other => format!("Error: {}", other),
        };
        writeln!(self.output, "{}", message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::storage::MemoryStore;
    use std::io::Cursor;

    fn run_menu(users: Vec<User>, script: &str) -> (String, BudgetService<MemoryStore>) {
        let service = BudgetService::new(MemoryStore::with_users(users));
        let mut output = Vec::new();
        let service = {
            let mut menu = Menu::new(service, Cursor::new(script.to_string()), &mut output);
            menu.run().unwrap();
            menu.into_service()
        };
        (String::from_utf8(output).unwrap(), service)
    }

    fn ann() -> User {
        User::new("Ann", "ann@example.com", 3000.0, 2000.0, 5000.0)
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::CreateUser));
        assert_eq!(MenuChoice::parse(" 7 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("8"), None);
        assert_eq!(MenuChoice::parse("create"), None);
    }

    #[test]
    fn test_exit_immediately() {
        let (output, service) = run_menu(vec![], "7\n");

        assert!(output.contains("--- Personal Budget Planner ---"));
        assert!(output.contains("Exiting application. Goodbye!"));
        assert_eq!(service.activity().descriptions(), vec!["Exited application"]);
    }

    #[test]
    fn test_end_of_input_exits() {
        let (output, _service) = run_menu(vec![], "");
        assert!(output.contains("Exiting application. Goodbye!"));
    }

    #[test]
    fn test_invalid_utf8_input_is_an_invalid_option() {
        let service = BudgetService::new(MemoryStore::new());
        let mut output = Vec::new();
        let mut menu = Menu::new(service, Cursor::new(&b"\xff\xfe\n2\n7\n"[..]), &mut output);

        assert!(menu.run().is_ok());
        drop(menu);

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Invalid option."));
        assert!(output.contains("No users found."));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_invalid_option_redisplays_menu() {
        let (output, _service) = run_menu(vec![], "9\n7\n");

        assert!(output.contains("Invalid option."));
        assert_eq!(output.matches("--- Personal Budget Planner ---").count(), 2);
    }

    #[test]
    fn test_create_user_with_reprompt() {
        let script = "1\nAnn\nann@example.com\nlots\n3000\n2000\n5000\n7\n";
        let (output, service) = run_menu(vec![], script);

        assert!(output.contains("Invalid amount"));
        assert!(output.contains("User created: Ann <ann@example.com>"));
        assert_eq!(service.store().users(), &[ann()]);
    }

    #[test]
    fn test_create_user_invalid_email_aborts() {
        let (output, service) = run_menu(vec![], "1\nAnn\nbad\n7\n");

        assert!(output.contains("Invalid email format."));
        assert!(service.store().users().is_empty());
        assert_eq!(service.activity().descriptions(), vec!["Exited application"]);
    }

    #[test]
    fn test_create_duplicate_reports_error() {
        let script = "1\nOther\nANN@example.com\n1\n1\n1\n7\n";
        let (output, service) = run_menu(vec![ann()], script);

        assert!(output.contains("A user with email ANN@example.com already exists."));
        assert_eq!(service.store().users().len(), 1);
    }

    #[test]
    fn test_view_users_empty() {
        let (output, _service) = run_menu(vec![], "2\n7\n");
        assert!(output.contains("No users found."));
    }

    #[test]
    fn test_update_unknown_user_skips_amount_prompts() {
        let (output, service) = run_menu(vec![ann()], "3\nnobody@example.com\n7\n");

        assert!(output.contains("User not found."));
        assert!(!output.contains("New income: "));
        assert_eq!(service.store().save_count(), 0);
    }

    #[test]
    fn test_update_user() {
        let script = "3\nann@example.com\n4000\n2500\n6000\n7\n";
        let (output, service) = run_menu(vec![ann()], script);

        assert!(output.contains("Updated user: Ann <ann@example.com>"));
        assert_eq!(service.store().users()[0].income, 4000.0);
    }

    #[test]
    fn test_delete_user() {
        let (output, service) = run_menu(vec![ann()], "4\nann@example.com\n7\n");

        assert!(output.contains("Deleted user: Ann <ann@example.com>"));
        assert!(service.store().users().is_empty());
    }

    #[test]
    fn test_savings_duration() {
        let (output, _service) = run_menu(vec![ann()], "6\nann@example.com\n7\n");
        assert!(output.contains("It will take approximately 5 month(s) to reach the savings goal."));
    }

    #[test]
    fn test_report_after_activity() {
        let (output, service) = run_menu(vec![ann()], "2\n2\n5\n7\n");

        assert!(output.contains("Total users: 1"));
        assert!(output.contains("  Viewed users: 2"));
        assert!(output.contains("Most frequent: Viewed users"));
        assert_eq!(
            service.activity().descriptions(),
            vec![
                "Viewed users",
                "Viewed users",
                "Generated report",
                "Exited application"
            ]
        );
    }
}
