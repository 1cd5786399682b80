#[cfg(test)]
mod tests;

/// How far along the current round is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Progress {
    pub answered: usize,
    pub total: usize,
    pub score: usize,
}

impl Progress {
    pub fn percentage(&self) -> usize {
        if self.total == 0 {
            return 0;
        }
        self.answered * 100 / self.total
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Rating {
    Perfect,
    Excellent,
    Good,
    NotBad,
    KeepTrying,
}

impl Rating {
    /// Buckets are inclusive lower bounds on the percentage of correct answers.
    pub fn from_score(score: usize, total: usize) -> Rating {
        if total == 0 {
            return Rating::KeepTrying;
        }
        let percent = score * 100;
        if score >= total {
            Rating::Perfect
        } else if percent >= 80 * total {
            Rating::Excellent
        } else if percent >= 60 * total {
            Rating::Good
        } else if percent >= 40 * total {
            Rating::NotBad
        } else {
            Rating::KeepTrying
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Rating::Perfect => "Perfect! You are a true expert!",
            Rating::Excellent => "Excellent work! You really know your stuff.",
            Rating::Good => "Good job! A very solid result.",
            Rating::NotBad => "Not bad! You are on your way to becoming an expert.",
            Rating::KeepTrying => "Don't be discouraged! Every attempt helps you learn.",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
    pub rating: Rating,
}

impl Summary {
    pub fn new(score: usize, total: usize) -> Self {
        Summary {
            score,
            total,
            rating: Rating::from_score(score, total),
        }
    }

    pub fn description(&self) -> &'static str {
        self.rating.description()
    }
}
