mod run_effect_test;
