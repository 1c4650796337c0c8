//! Interactive menu shell
//!
//! A login menu followed by the main menu. The shell is generic over its
//! input and output so tests can drive it with in-memory buffers; the binary
//! wires it to stdin and stdout.

pub mod prompt;

use std::io::{BufRead, Write};

use crate::config::Settings;
use crate::display::{
    format_amount, format_budget_comparison, format_category_list, format_expense_details,
    format_expense_list, format_summary,
};
use crate::error::{TrackerError, TrackerResult};
use crate::reports::ExpenseSummary;
use crate::services::{
    AuthService, BudgetAnalyzer, CategoryService, CreateExpenseInput, ExpenseService, Session,
};
use crate::storage::Storage;

pub use prompt::{Prompter, ShellError, ShellResult};

/// Most expenses accepted by one "Add Multiple Expenses" run
pub const MAX_BATCH: usize = 1000;

/// Result of the login menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// A user logged in; continue to the main menu
    Proceed(String),
    /// The user chose to exit
    Exit,
}

/// The interactive expense tracker
pub struct Shell<'a, R, W> {
    storage: &'a Storage,
    settings: &'a Settings,
    prompt: Prompter<R, W>,
    session: Session,
    budget: BudgetAnalyzer,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, prompt: Prompter<R, W>) -> Self {
        Self {
            storage,
            settings,
            prompt,
            session: Session::new(),
            budget: BudgetAnalyzer::new(),
        }
    }

    /// Run until the user exits, logs out, or input ends
    pub fn run(&mut self) -> TrackerResult<()> {
        match self.run_menus() {
            Ok(()) => Ok(()),
            Err(ShellError::EndOfInput) => {
                tracing::debug!("input closed, leaving shell");
                Ok(())
            }
            Err(ShellError::Io(e)) => Err(e.into()),
        }
    }

    fn run_menus(&mut self) -> ShellResult<()> {
        match self.login_menu()? {
            LoginOutcome::Exit => Ok(()),
            LoginOutcome::Proceed(_) => self.main_menu(),
        }
    }

    fn auth(&self) -> AuthService<'a> {
        AuthService::new(self.storage).with_password_storage(self.settings.password_storage)
    }

    fn currency(&self) -> &'a str {
        &self.settings.currency_symbol
    }

    fn say(&mut self, message: &str) -> ShellResult<()> {
        writeln!(self.prompt.out(), "{}", message)?;
        Ok(())
    }

    /// Print a failed operation and return to the menu
    fn report(&mut self, err: &TrackerError) -> ShellResult<()> {
        match err {
            TrackerError::Validation(msg) => self.say(msg),
            TrackerError::Io(_) | TrackerError::Storage(_) => {
                tracing::warn!(error = %err, "changes could not be saved");
                self.say(&format!("Warning: changes could not be saved ({})", err))
            }
            _ => self.say(&format!("Error: {}", err)),
        }
    }

    // Login menu

    pub fn login_menu(&mut self) -> ShellResult<LoginOutcome> {
        loop {
            self.say("Welcome to Expense Tracker")?;
            self.say("1. Register")?;
            self.say("2. Login")?;
            self.say("3. Exit")?;

            match self.prompt.choice()? {
                Some(1) => self.register()?,
                Some(2) => {
                    if let Some(user) = self.login()? {
                        return Ok(LoginOutcome::Proceed(user));
                    }
                }
                Some(3) => {
                    self.say("Exiting...")?;
                    return Ok(LoginOutcome::Exit);
                }
                _ => self.say("Invalid choice. Please try again.")?,
            }
        }
    }

    fn register(&mut self) -> ShellResult<()> {
        let username = self.prompt.line("Enter username: ")?;
        let password = self.prompt.password("Enter password: ")?;

        match self.auth().register(&username, &password) {
            Ok(_) => self.say("Registration successful. Please login."),
            Err(TrackerError::Duplicate { .. }) => {
                self.say("Username already exists. Please try again.")
            }
            Err(e) => self.report(&e),
        }
    }

    fn login(&mut self) -> ShellResult<Option<String>> {
        let username = self.prompt.line("Enter username: ")?;
        let password = self.prompt.password("Enter password: ")?;

        let auth = self.auth();
        match self.session.login(&auth, &username, &password) {
            Ok(true) => {
                self.say(&format!("Login successful. Welcome, {}!", username))?;
                Ok(Some(username))
            }
            Ok(false) => {
                self.say("Invalid username or password. Please try again.")?;
                Ok(None)
            }
            Err(e) => {
                self.report(&e)?;
                Ok(None)
            }
        }
    }

    // Main menu

    fn main_menu(&mut self) -> ShellResult<()> {
        while self.session.is_logged_in() {
            self.say("\nMain Menu:")?;
            self.say("1. Add Expense")?;
            self.say("2. Add Multiple Expenses")?;
            self.say("3. View Expenses")?;
            self.say("4. Delete Expense")?;
            self.say("5. Search Expenses")?;
            self.say("6. Generate Report")?;
            self.say("7. Calculate Total Expense in Range")?;
            self.say("8. Manage Categories")?;
            self.say("9. Set Monthly Budget")?;
            self.say("10. View Monthly Budget")?;
            self.say("11. Analyze Expenses Against Budget")?;
            self.say("12. Logout")?;

            match self.prompt.choice()? {
                Some(1) => self.add_expense()?,
                Some(2) => self.add_multiple_expenses()?,
                Some(3) => self.view_expenses()?,
                Some(4) => self.delete_expense()?,
                Some(5) => self.search_expenses()?,
                Some(6) => self.generate_report()?,
                Some(7) => self.total_in_range()?,
                Some(8) => self.manage_categories()?,
                Some(9) => self.set_budget()?,
                Some(10) => self.view_budget()?,
                Some(11) => self.analyze_budget()?,
                Some(12) => {
                    self.say("Logging out...")?;
                    self.session.logout();
                }
                _ => self.say("Invalid choice. Please try again.")?,
            }
        }
        Ok(())
    }

    fn read_expense(&mut self) -> ShellResult<CreateExpenseInput> {
        let category = self.prompt.line("Enter category: ")?;
        let description = self.prompt.line("Enter description: ")?;
        let amount = self.prompt.amount("Enter amount: ")?;
        let date = self.prompt.date("Enter date (YYYY-MM-DD): ")?;
        Ok(CreateExpenseInput::new(
            category,
            description,
            amount,
            date.as_str(),
        ))
    }

    fn add_expense(&mut self) -> ShellResult<()> {
        let input = self.read_expense()?;
        match ExpenseService::new(self.storage).add(input) {
            Ok(expense) => self.say(&format!("Expense added with ID: {}", expense.id)),
            Err(e) => self.report(&e),
        }
    }

    fn add_multiple_expenses(&mut self) -> ShellResult<()> {
        let retry = format!("Please enter a whole number from 0 to {}.", MAX_BATCH);
        let count = loop {
            let count: usize = self
                .prompt
                .parsed("Enter the number of expenses you want to add: ", &retry)?;
            if count <= MAX_BATCH {
                break count;
            }
            self.say(&retry)?;
        };

        let mut inputs = Vec::new();
        for i in 1..=count {
            self.say(&format!("Expense {}:", i))?;
            inputs.push(self.read_expense()?);
        }

        match ExpenseService::new(self.storage).add_batch(inputs) {
            Ok(added) => self.say(&format!("Added {} expenses.", added.len())),
            Err(e) => self.report(&e),
        }
    }

    fn view_expenses(&mut self) -> ShellResult<()> {
        match ExpenseService::new(self.storage).list() {
            Ok(expenses) => {
                let text = format_expense_list(&expenses, self.currency());
                write!(self.prompt.out(), "{}", text)?;
                Ok(())
            }
            Err(e) => self.report(&e),
        }
    }

    fn delete_expense(&mut self) -> ShellResult<()> {
        let answer = self.prompt.line("Enter expense ID to delete: ")?;
        let service = ExpenseService::new(self.storage);

        let expense = match service.find(&answer) {
            Ok(expense) => expense,
            Err(e) if e.is_not_found() => {
                return self.say(&format!("No expense with ID {}.", answer.trim()))
            }
            Err(e) => return self.report(&e),
        };

        match service.delete(expense.id) {
            Ok(_) => {
                let details = format_expense_details(&expense, self.currency());
                write!(self.prompt.out(), "{}", details)?;
                self.say(&format!("Expense {} deleted.", expense.id))
            }
            Err(e) => self.report(&e),
        }
    }

    fn search_expenses(&mut self) -> ShellResult<()> {
        let query = self
            .prompt
            .line("Enter search query (category/description/date): ")?;

        match ExpenseService::new(self.storage).search(&query) {
            Ok(found) => {
                let text = format_expense_list(&found, self.currency());
                write!(self.prompt.out(), "{}", text)?;
                Ok(())
            }
            Err(e) => self.report(&e),
        }
    }

    fn generate_report(&mut self) -> ShellResult<()> {
        match ExpenseSummary::generate(self.storage) {
            Ok(summary) => {
                let text = format_summary(&summary, self.currency());
                write!(self.prompt.out(), "{}", text)?;
                Ok(())
            }
            Err(e) => self.report(&e),
        }
    }

    fn total_in_range(&mut self) -> ShellResult<()> {
        let start = self.prompt.line("Enter start date (YYYY-MM-DD): ")?;
        let end = self.prompt.line("Enter end date (YYYY-MM-DD): ")?;

        match ExpenseSummary::generate_for_range(self.storage, start.trim(), end.trim()) {
            Ok(summary) => {
                let text = format_summary(&summary, self.currency());
                write!(self.prompt.out(), "{}", text)?;
                Ok(())
            }
            Err(e) if e.is_validation() => {
                self.say("Invalid date format. Please use YYYY-MM-DD.")
            }
            Err(e) => self.report(&e),
        }
    }

    fn manage_categories(&mut self) -> ShellResult<()> {
        loop {
            self.say("\nManage Categories:")?;
            self.say("1. View Categories")?;
            self.say("2. Add Category")?;
            self.say("3. Delete Category")?;
            self.say("4. Exit")?;

            let service = CategoryService::new(self.storage);
            match self.prompt.choice()? {
                Some(1) => match service.list() {
                    Ok(categories) => {
                        write!(self.prompt.out(), "{}", format_category_list(&categories))?;
                    }
                    Err(e) => self.report(&e)?,
                },
                Some(2) => {
                    let answer = self.prompt.line("Enter category name: ")?;
                    let name = answer.trim();
                    match service.add(name) {
                        Ok(true) => self.say(&format!("Category '{}' added.", name))?,
                        Ok(false) => self.say(&format!("Category '{}' already exists.", name))?,
                        Err(e) => self.report(&e)?,
                    }
                }
                Some(3) => {
                    let answer = self.prompt.line("Enter category name to delete: ")?;
                    let name = answer.trim();
                    match service.delete(name) {
                        Ok(true) => self.say(&format!("Category '{}' deleted.", name))?,
                        Ok(false) => self.say(&format!("No category named '{}'.", name))?,
                        Err(e) => self.report(&e)?,
                    }
                }
                Some(4) => return Ok(()),
                _ => self.say("Invalid choice. Please try again.")?,
            }
        }
    }

    fn set_budget(&mut self) -> ShellResult<()> {
        let value = self.prompt.amount("Enter monthly budget: ")?;
        self.budget.set_budget(value);
        self.say(&format!(
            "Monthly budget set to {}",
            format_amount(value, self.currency())
        ))
    }

    fn view_budget(&mut self) -> ShellResult<()> {
        self.say(&format!(
            "Monthly Budget: {}",
            format_amount(self.budget.budget(), self.currency())
        ))
    }

    fn analyze_budget(&mut self) -> ShellResult<()> {
        match ExpenseService::new(self.storage).total() {
            Ok(total) => {
                let cmp = self.budget.compare_to_total(total);
                let text = format_budget_comparison(&cmp, self.currency());
                write!(self.prompt.out(), "{}", text)?;
                Ok(())
            }
            Err(e) => self.report(&e),
        }
    }

    /// The session, for inspection after a run
    pub fn session(&self) -> &Session {
        &self.session
    }
}
